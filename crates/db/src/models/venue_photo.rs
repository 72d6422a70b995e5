use serde::Serialize;
use sqlx::FromRow;
use showroom_core::types::{DbId, Timestamp};

/// A row from the `venue_photos` table.
///
/// Serialized in camelCase, which is the shape the venue visualizer
/// panel consumes.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePhoto {
    pub id: DbId,
    pub venue_id: String,
    pub label: String,
    pub image_url: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
