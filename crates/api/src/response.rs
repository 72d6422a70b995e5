//! Response bodies for the catalog and venue-photo endpoints.
//!
//! Each endpoint names its payload field (`manufacturers`, `photo`,
//! `photos`) rather than using a generic envelope, matching what the
//! panel front-end reads.

use serde::Serialize;
use showroom_db::models::venue_photo::VenuePhoto;

/// `GET /api/manufacturers/list` body.
///
/// `degraded` is only serialized when the lookup failed and the empty list
/// stands in for the real one.
#[derive(Debug, Serialize)]
pub struct ManufacturerListResponse {
    pub manufacturers: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub degraded: bool,
}

impl ManufacturerListResponse {
    pub fn ok(manufacturers: Vec<String>) -> Self {
        Self {
            manufacturers,
            degraded: false,
        }
    }

    pub fn degraded() -> Self {
        Self {
            manufacturers: Vec::new(),
            degraded: true,
        }
    }
}

/// `POST /api/venue-visualizer/photos` body.
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub photo: VenuePhoto,
}

/// `GET /api/venue-visualizer/photos` body.
#[derive(Debug, Serialize)]
pub struct PhotoListResponse {
    pub photos: Vec<VenuePhoto>,
}
