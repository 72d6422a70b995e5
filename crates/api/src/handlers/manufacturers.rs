//! Handlers for the manufacturer catalog.

use axum::extract::State;
use axum::Json;

use crate::response::ManufacturerListResponse;
use crate::state::AppState;

/// GET /api/manufacturers/list
///
/// Distinct names of manufacturers with at least one active product,
/// ascending. A failed lookup is logged and answered with an empty,
/// `degraded` list instead of an error so the panel can fall back to its
/// built-in list.
pub async fn list_manufacturers(State(state): State<AppState>) -> Json<ManufacturerListResponse> {
    match state.store.list_active_manufacturers().await {
        Ok(manufacturers) => {
            tracing::debug!(count = manufacturers.len(), "Listed manufacturers");
            Json(ManufacturerListResponse::ok(manufacturers))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to list manufacturers, returning empty list");
            Json(ManufacturerListResponse::degraded())
        }
    }
}
