//! Venue photo submission schema and validation.
//!
//! Request bodies are deserialized into [`PhotoSubmission`], where every
//! field is optional, and then checked with `validator`. A passing
//! submission becomes a [`NewVenuePhoto`] that the persistence layer
//! accepts; a failing one yields [`CoreError::MissingFields`] naming every
//! absent field, so callers get the whole report in one round trip.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Client-facing message when a photo submission lacks a required field.
pub const PHOTO_FIELDS_REQUIRED: &str = "venueId, label, imageUrl required";

/// Client-facing message when a photo listing lacks its venue filter.
pub const VENUE_ID_REQUIRED: &str = "venueId required";

/// Sort position used when a submission does not supply one.
pub const DEFAULT_SORT_ORDER: i32 = 0;

/// Required submission fields as `(struct field, wire name)` pairs, in the
/// order they are reported.
const REQUIRED_PHOTO_FIELDS: &[(&str, &str)] = &[
    ("venue_id", "venueId"),
    ("label", "label"),
    ("image_url", "imageUrl"),
];

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

/// Raw `POST /venue-visualizer/photos` body.
///
/// An absent key and any falsy value (`null`, `false`, `0`, `""`) count as
/// missing. Other non-string values fail deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSubmission {
    #[serde(default, deserialize_with = "falsy_as_none")]
    #[validate(required, length(min = 1))]
    pub venue_id: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    #[validate(required, length(min = 1))]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    #[validate(required, length(min = 1))]
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

/// A validated photo ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenuePhoto {
    pub venue_id: String,
    pub label: String,
    pub image_url: String,
    pub sort_order: i32,
}

/// Query string for `GET /venue-visualizer/photos`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhotoListQuery {
    #[validate(required, length(min = 1))]
    pub venue_id: Option<String>,
}

impl PhotoSubmission {
    /// Validate the submission and convert it into a [`NewVenuePhoto`].
    ///
    /// `sort_order` falls back to [`DEFAULT_SORT_ORDER`].
    pub fn into_new_photo(self) -> Result<NewVenuePhoto, CoreError> {
        if let Err(errors) = self.validate() {
            return Err(missing_fields(&errors, REQUIRED_PHOTO_FIELDS, PHOTO_FIELDS_REQUIRED));
        }

        match (self.venue_id, self.label, self.image_url) {
            (Some(venue_id), Some(label), Some(image_url)) => Ok(NewVenuePhoto {
                venue_id,
                label,
                image_url,
                sort_order: self.sort_order.unwrap_or(DEFAULT_SORT_ORDER),
            }),
            _ => Err(CoreError::MissingFields {
                message: PHOTO_FIELDS_REQUIRED,
                fields: REQUIRED_PHOTO_FIELDS.iter().map(|(_, wire)| *wire).collect(),
            }),
        }
    }
}

impl PhotoListQuery {
    /// Validate the query and return the venue to list photos for.
    pub fn into_venue_id(self) -> Result<String, CoreError> {
        let missing = || CoreError::MissingFields {
            message: VENUE_ID_REQUIRED,
            fields: vec!["venueId"],
        };

        self.validate().map_err(|_| missing())?;
        self.venue_id.ok_or_else(missing)
    }
}

/// Read a required string field, mapping falsy JSON values to `None`.
///
/// Empty strings are kept so the `length` rule reports them.
fn falsy_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid type: {other}, expected a string"
        ))),
    }
}

/// Build a [`CoreError::MissingFields`] listing every required field that
/// has at least one validation error.
///
/// Error keys may carry either the struct field name or the serde-renamed
/// wire name, so both are checked.
fn missing_fields(
    errors: &ValidationErrors,
    required: &[(&'static str, &'static str)],
    message: &'static str,
) -> CoreError {
    let field_errors = errors.field_errors();
    let fields = required
        .iter()
        .filter(|(field, wire)| field_errors.contains_key(*field) || field_errors.contains_key(*wire))
        .map(|(_, wire)| *wire)
        .collect();

    CoreError::MissingFields { message, fields }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
