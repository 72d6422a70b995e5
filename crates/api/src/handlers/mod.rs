pub mod manufacturers;
pub mod venue_photos;
