//! Manufacturer product catalog rows.

use sqlx::FromRow;
use showroom_core::types::{DbId, Timestamp};

/// A row from the `manufacturer_products` table.
///
/// Many products may share one `manufacturer`; only `is_active` rows are
/// surfaced by the manufacturer listing.
#[derive(Debug, Clone, FromRow)]
pub struct ManufacturerProduct {
    pub id: DbId,
    pub name: String,
    pub manufacturer: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a catalog product.
///
/// Nothing in the HTTP surface creates products; this backs seeding.
#[derive(Debug, Clone)]
pub struct CreateManufacturerProduct {
    pub name: String,
    pub manufacturer: String,
    pub is_active: bool,
}
