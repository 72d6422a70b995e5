//! Domain types, errors, and request validation shared by the db and api
//! crates.

pub mod error;
pub mod types;
pub mod venue_photo;
