/// Failure of the document store itself, as opposed to a lookup that found
/// nothing (reported as `None` / `false` by the store methods).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver-level failure: connectivity, server error, or a document that
    /// could not be decoded.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("In-memory store lock poisoned")]
    Poisoned,
}
