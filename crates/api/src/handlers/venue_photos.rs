//! Handlers for venue visualizer photos.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use showroom_core::venue_photo::{PhotoListQuery, PhotoSubmission};

use crate::error::{AppError, AppResult};
use crate::response::{PhotoListResponse, PhotoResponse};
use crate::state::AppState;

/// POST /api/venue-visualizer/photos
///
/// The body is parsed as JSON whatever its `Content-Type`. Validates
/// `venueId`, `label` and `imageUrl` before touching the store. Store
/// failures are returned as a 500 carrying the error text.
pub async fn create_venue_photo(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PhotoResponse>> {
    let submission: PhotoSubmission = serde_json::from_slice(&body)
        .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}")))?;
    let new_photo = submission.into_new_photo()?;

    let photo = state
        .store
        .create_venue_photo(&new_photo)
        .await
        .map_err(|err| AppError::Surfaced(err.to_string()))?;

    tracing::info!(
        photo_id = photo.id,
        venue_id = %photo.venue_id,
        sort_order = photo.sort_order,
        "Venue photo created",
    );

    Ok(Json(PhotoResponse { photo }))
}

/// GET /api/venue-visualizer/photos?venueId=...
///
/// A venue's photos ordered by `sortOrder`, then creation.
pub async fn list_venue_photos(
    State(state): State<AppState>,
    query: Result<Query<PhotoListQuery>, QueryRejection>,
) -> AppResult<Json<PhotoListResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let venue_id = query.into_venue_id()?;

    let photos = state.store.list_venue_photos(&venue_id).await?;

    Ok(Json(PhotoListResponse { photos }))
}
