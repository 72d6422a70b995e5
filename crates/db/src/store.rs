//! Persistence seam used by the HTTP handlers.
//!
//! Handlers hold an `Arc<dyn CatalogStore>` instead of reaching for a
//! global pool, so tests can swap in an in-memory implementation.
//! [`PgCatalogStore`] is the production implementation and delegates to
//! the repository structs.

use async_trait::async_trait;
use showroom_core::venue_photo::NewVenuePhoto;

use crate::models::venue_photo::VenuePhoto;
use crate::repositories::{ManufacturerProductRepo, VenuePhotoRepo};
use crate::DbPool;

/// Catalog and venue-photo operations, one database call each.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// Distinct manufacturer names among active products, ascending.
    async fn list_active_manufacturers(&self) -> Result<Vec<String>, sqlx::Error>;

    /// Insert a venue photo and return the created record.
    async fn create_venue_photo(&self, photo: &NewVenuePhoto) -> Result<VenuePhoto, sqlx::Error>;

    /// A venue's photos in display order.
    async fn list_venue_photos(&self, venue_id: &str) -> Result<Vec<VenuePhoto>, sqlx::Error>;
}

/// [`CatalogStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list_active_manufacturers(&self) -> Result<Vec<String>, sqlx::Error> {
        ManufacturerProductRepo::list_active_manufacturers(&self.pool).await
    }

    async fn create_venue_photo(&self, photo: &NewVenuePhoto) -> Result<VenuePhoto, sqlx::Error> {
        VenuePhotoRepo::create(&self.pool, photo).await
    }

    async fn list_venue_photos(&self, venue_id: &str) -> Result<Vec<VenuePhoto>, sqlx::Error> {
        VenuePhotoRepo::list_by_venue(&self.pool, venue_id).await
    }
}
