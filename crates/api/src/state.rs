use std::sync::Arc;

use movies_db::repositories::MovieStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Movie document store. Pooled and thread-safe.
    pub store: Arc<dyn MovieStore>,
}
