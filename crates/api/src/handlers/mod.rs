//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single resource. Handlers delegate to the store in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod movie;
