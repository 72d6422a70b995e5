use axum::routing::get;
use axum::Router;

use crate::handlers::manufacturers;
use crate::state::AppState;

/// Manufacturer routes mounted at `/manufacturers`.
///
/// ```text
/// GET /list  -> list_manufacturers
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/list", get(manufacturers::list_manufacturers))
}
