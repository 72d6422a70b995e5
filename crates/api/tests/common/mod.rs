//! Shared integration-test harness.
//!
//! Provides the in-memory [`MemoryStore`] fake, router builders for both
//! the fake and a real `PgPool`, and request/response helpers.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use showroom_api::config::{LogFormat, ServerConfig};
use showroom_api::router::build_app_router;
use showroom_api::state::AppState;
use showroom_core::venue_photo::NewVenuePhoto;
use showroom_db::models::manufacturer_product::CreateManufacturerProduct;
use showroom_db::models::venue_photo::VenuePhoto;
use showroom_db::repositories::ManufacturerProductRepo;
use showroom_db::store::{CatalogStore, PgCatalogStore};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Router builders
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        log_format: LogFormat::Text,
    }
}

/// Build the full application router (all middleware) around `store`.
pub fn build_test_app(store: Arc<dyn CatalogStore>) -> Router {
    build_app_router(AppState { store }, &test_config()).unwrap()
}

/// Build the full application router backed by a real database pool.
pub fn build_pg_app(pool: PgPool) -> Router {
    build_test_app(Arc::new(PgCatalogStore::new(pool)))
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// The error every failing [`MemoryStore`] call returns.
pub fn store_failure() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

/// [`CatalogStore`] fake holding products and photos in memory.
///
/// When `failing` is set every call returns [`store_failure`] and nothing
/// is written.
#[derive(Default)]
pub struct MemoryStore {
    products: Mutex<Vec<(String, bool)>>,
    photos: Mutex<Vec<VenuePhoto>>,
    failing: AtomicBool,
}

impl MemoryStore {
    /// A store whose every call fails.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Add a product row for `manufacturer`.
    pub fn add_product(&self, manufacturer: &str, is_active: bool) {
        self.products
            .lock()
            .unwrap()
            .push((manufacturer.to_string(), is_active));
    }

    pub fn photos(&self) -> Vec<VenuePhoto> {
        self.photos.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(store_failure())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check()
    }

    async fn list_active_manufacturers(&self) -> Result<Vec<String>, sqlx::Error> {
        self.check()?;
        let names: BTreeSet<String> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, active)| *active)
            .map(|(name, _)| name.clone())
            .collect();
        Ok(names.into_iter().collect())
    }

    async fn create_venue_photo(&self, photo: &NewVenuePhoto) -> Result<VenuePhoto, sqlx::Error> {
        self.check()?;
        let mut photos = self.photos.lock().unwrap();
        let now = chrono::Utc::now();
        let created = VenuePhoto {
            id: photos.len() as i64 + 1,
            venue_id: photo.venue_id.clone(),
            label: photo.label.clone(),
            image_url: photo.image_url.clone(),
            sort_order: photo.sort_order,
            created_at: now,
            updated_at: now,
        };
        photos.push(created.clone());
        Ok(created)
    }

    async fn list_venue_photos(&self, venue_id: &str) -> Result<Vec<VenuePhoto>, sqlx::Error> {
        self.check()?;
        let mut photos: Vec<VenuePhoto> = self
            .photos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.venue_id == venue_id)
            .cloned()
            .collect();
        photos.sort_by_key(|p| (p.sort_order, p.id));
        Ok(photos)
    }
}

// ---------------------------------------------------------------------------
// Database seeding
// ---------------------------------------------------------------------------

/// Insert a catalog product directly through the repository.
pub async fn seed_product(pool: &PgPool, name: &str, manufacturer: &str, is_active: bool) {
    ManufacturerProductRepo::create(
        pool,
        &CreateManufacturerProduct {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            is_active,
        },
    )
    .await
    .unwrap();
}

/// Number of rows in `venue_photos`.
pub async fn count_photos(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venue_photos")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

/// POST an arbitrary string with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a body with no `Content-Type` header.
pub async fn post_untyped(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
