//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod manufacturer_product_repo;
pub mod venue_photo_repo;

pub use manufacturer_product_repo::ManufacturerProductRepo;
pub use venue_photo_repo::VenuePhotoRepo;
