//! In-process movie store.
//!
//! Keeps documents in insertion order and mints ObjectId-format ids, so it
//! behaves like the MongoDB store from a caller's point of view. Locks are
//! held only for the duration of a single operation.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use indexmap::IndexMap;
use mongodb::bson::oid::ObjectId;
use movies_core::movie::{MovieChanges, NewMovie};

use crate::error::StoreError;
use crate::models::movie::{parse_id, Movie, MovieDocument};
use crate::repositories::MovieStore;

#[derive(Debug, Default)]
pub struct MemoryMovieStore {
    documents: RwLock<IndexMap<ObjectId, MovieDocument>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<ObjectId, MovieDocument>>, StoreError> {
        self.documents.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, IndexMap<ObjectId, MovieDocument>>, StoreError> {
        self.documents.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn insert(&self, input: &NewMovie) -> Result<Movie, StoreError> {
        let document = MovieDocument::new(input);
        self.write()?.insert(document.id, document.clone());
        Ok(document.into())
    }

    async fn find_all(&self, limit: Option<u64>) -> Result<Vec<Movie>, StoreError> {
        let take = limit.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));
        let documents = self.read()?;
        Ok(documents
            .values()
            .take(take)
            .cloned()
            .map(Movie::from)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.read()?.get(&oid).cloned().map(Movie::from))
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        let mut documents = self.write()?;
        Ok(documents.get_mut(&oid).map(|document| {
            document.apply(changes);
            Movie::from(document.clone())
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(false);
        };
        Ok(self.write()?.shift_remove(&oid).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
