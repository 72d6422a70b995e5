//! Route definitions for venue visualizer photos.

use axum::routing::get;
use axum::Router;

use crate::handlers::venue_photos;
use crate::state::AppState;

/// Venue photo routes mounted at `/venue-visualizer/photos`.
///
/// ```text
/// GET  /  -> list_venue_photos
/// POST /  -> create_venue_photo
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(venue_photos::list_venue_photos).post(venue_photos::create_venue_photo),
    )
}
