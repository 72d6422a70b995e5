//! Repository for the `manufacturer_products` table.

use sqlx::PgPool;

use crate::models::manufacturer_product::{CreateManufacturerProduct, ManufacturerProduct};

/// Column list for `manufacturer_products` queries.
const COLUMNS: &str = "id, name, manufacturer, is_active, created_at, updated_at";

/// Provides data access for manufacturer catalog products.
pub struct ManufacturerProductRepo;

impl ManufacturerProductRepo {
    /// Distinct manufacturer names among active products, ascending.
    pub async fn list_active_manufacturers(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT manufacturer FROM manufacturer_products \
             WHERE is_active \
             ORDER BY manufacturer ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a catalog product.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateManufacturerProduct,
    ) -> Result<ManufacturerProduct, sqlx::Error> {
        let query = format!(
            "INSERT INTO manufacturer_products (name, manufacturer, is_active) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ManufacturerProduct>(&query)
            .bind(&dto.name)
            .bind(&dto.manufacturer)
            .bind(dto.is_active)
            .fetch_one(pool)
            .await
    }
}
