use async_trait::async_trait;
use movies_core::movie::{MovieChanges, NewMovie};

use crate::error::StoreError;
use crate::models::movie::Movie;

/// CRUD operations on the movie collection.
///
/// Not-found is a successful outcome here (`None` / `false`); `StoreError`
/// is reserved for failures of the store itself.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persist a new movie under a fresh id and return the stored form.
    async fn insert(&self, input: &NewMovie) -> Result<Movie, StoreError>;

    /// List movies in store order, at most `limit` of them when given.
    async fn find_all(&self, limit: Option<u64>) -> Result<Vec<Movie>, StoreError>;

    /// Find a movie by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError>;

    /// Overwrite the fields present in `changes`, returning the updated movie.
    ///
    /// Returns `None` if no movie with the given `id` exists.
    async fn update_by_id(
        &self,
        id: &str,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, StoreError>;

    /// Delete a movie. Returns `true` if a document was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
