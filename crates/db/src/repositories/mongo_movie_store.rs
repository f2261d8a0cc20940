//! MongoDB-backed movie store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use movies_core::movie::{MovieChanges, NewMovie};

use crate::error::StoreError;
use crate::models::movie::{parse_id, Movie, MovieDocument, COLLECTION};
use crate::repositories::MovieStore;

/// Movie store over the `movies` collection of a connected database.
#[derive(Debug, Clone)]
pub struct MongoMovieStore {
    db: Database,
    collection: Collection<MovieDocument>,
}

impl MongoMovieStore {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl MovieStore for MongoMovieStore {
    async fn insert(&self, input: &NewMovie) -> Result<Movie, StoreError> {
        let document = MovieDocument::new(input);
        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn find_all(&self, limit: Option<u64>) -> Result<Vec<Movie>, StoreError> {
        let mut find = self.collection.find(doc! {});
        if let Some(limit) = limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        let documents: Vec<MovieDocument> = find.await?.try_collect().await?;
        Ok(documents.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Movie::from))
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        // An empty `$set` is rejected by the server.
        let Some(update) = update_document(changes) else {
            return self.find_by_id(id).await;
        };
        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(Movie::from))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(false);
        };
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.db).await
    }
}

/// Translate `changes` into a `$set` / `$unset` update document.
///
/// Returns `None` when there is nothing to change.
fn update_document(changes: &MovieChanges) -> Option<Document> {
    let mut set = Document::new();
    let mut unset = Document::new();

    if let Some(movie) = &changes.movie {
        set.insert("movie", movie.as_str());
    }
    if let Some(description) = &changes.description {
        set.insert("description", description.as_str());
    }
    match &changes.image {
        Some(Some(image)) => {
            set.insert("image", image.as_str());
        }
        Some(None) => {
            unset.insert("image", "");
        }
        None => {}
    }

    let mut update = Document::new();
    if !set.is_empty() {
        update.insert("$set", set);
    }
    if !unset.is_empty() {
        update.insert("$unset", unset);
    }
    (!update.is_empty()).then_some(update)
}
