//! Row models for the tables this service reads and writes.

pub mod manufacturer_product;
pub mod venue_photo;
