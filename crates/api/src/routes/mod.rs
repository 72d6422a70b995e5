pub mod health;
pub mod manufacturers;
pub mod venue_photos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /manufacturers/list                             distinct active manufacturers (GET)
///
/// /venue-visualizer/photos                        list (GET ?venueId=), create (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Manufacturer catalog.
        .nest("/manufacturers", manufacturers::router())
        // Venue visualizer photos.
        .nest("/venue-visualizer/photos", venue_photos::router())
}
