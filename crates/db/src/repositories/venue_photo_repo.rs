//! Repository for the `venue_photos` table.

use showroom_core::venue_photo::NewVenuePhoto;
use sqlx::PgPool;

use crate::models::venue_photo::VenuePhoto;

/// Column list for `venue_photos` queries.
const COLUMNS: &str = "\
    id, venue_id, label, image_url, sort_order, \
    created_at, updated_at";

/// Provides data access for venue photos.
pub struct VenuePhotoRepo;

impl VenuePhotoRepo {
    /// Insert a new photo, returning the created row with its generated
    /// id and timestamps.
    pub async fn create(pool: &PgPool, dto: &NewVenuePhoto) -> Result<VenuePhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO venue_photos (venue_id, label, image_url, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VenuePhoto>(&query)
            .bind(&dto.venue_id)
            .bind(&dto.label)
            .bind(&dto.image_url)
            .bind(dto.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List a venue's photos in display order (`sort_order`, then `id`).
    pub async fn list_by_venue(pool: &PgPool, venue_id: &str) -> Result<Vec<VenuePhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM venue_photos \
             WHERE venue_id = $1 \
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, VenuePhoto>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }
}
