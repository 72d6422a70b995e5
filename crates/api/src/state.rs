use std::sync::Arc;

use showroom_db::store::CatalogStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence seam. Production wraps a `PgPool`; tests inject fakes.
    pub store: Arc<dyn CatalogStore>,
}
