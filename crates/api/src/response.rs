//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
