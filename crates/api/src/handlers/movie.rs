//! Handlers for the `/movies` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::{validate_movie_changes, validate_new_movie, ENTITY};
use movies_db::models::movie::Movie;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /api/movies
///
/// Store failures are reported as 400 with a fixed message; the cause is
/// only logged.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Json(payload) = payload?;
    let input = validate_new_movie(&payload)?;

    let movie = state.store.insert(&input).await.map_err(|err| {
        tracing::error!(error = %err, "Failed to insert movie");
        AppError::BadRequest("Error creating new movie".to_string())
    })?;

    tracing::info!(movie_id = %movie.id, "Movie created");
    Ok(Json(movie))
}

/// GET /api/movies?limit=
///
/// A query string that does not deserialize (a repeated `limit`, say) lists
/// without a cap instead of rejecting the request.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let params = params.map(|Query(params)| params).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Ignoring unusable list query");
        ListParams::default()
    });
    let limit = params.limit();
    let movies = state.store.find_all(limit).await?;
    tracing::debug!(?limit, count = movies.len(), "Listed movies");
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// PUT /api/movies/{id}
///
/// Overwrites only the fields present in the body; present fields are held
/// to the create rules.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Json(payload) = payload?;
    let changes = validate_movie_changes(&payload)?;

    let movie = state
        .store
        .update_by_id(&id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_by_id(&id).await? {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = %id, "Movie deleted");
    Ok(Json(MessageResponse {
        message: format!("{ENTITY} with ID {id} deleted successfully"),
    }))
}
