//! Field-scoped validation errors
//!
//! Every problem found in a submission is recorded against the field it belongs
//! to, so the caller can render all of them at once next to the inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::fields;
use super::validators::{
    BRAND_MAX, COLOR_MAX, CONTACT_NAME_MAX, DESCRIPTION_MAX, DESCRIPTION_MIN, ITEM_NAME_MAX,
    ITEM_NAME_MIN, LOCATION_MAX, LOCATION_MIN, PROOF_MIN,
};

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[error("this field is required")]
    Required,

    #[error("value is too short")]
    TooShort,

    #[error("value is too long")]
    TooLong,

    #[error("value has an invalid format")]
    InvalidFormat,

    #[error("value is not one of the available choices")]
    InvalidChoice,

    #[error("file is too large")]
    TooLarge,

    #[error("file type is not supported")]
    UnsupportedType,
}

/// All field failures of one submission, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("validation failed for {} field(s)", .0.len())]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, ErrorKind>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record the outcome of a validator. The first failure of a field wins.
    pub fn check(&mut self, field: &str, outcome: Result<(), ErrorKind>) -> &mut Self {
        if let Err(kind) = outcome {
            self.add(field, kind);
        }
        self
    }

    pub fn add(&mut self, field: impl Into<String>, kind: ErrorKind) -> &mut Self {
        self.0.entry(field.into()).or_insert(kind);
        self
    }

    pub fn get(&self, field: &str) -> Option<ErrorKind> {
        self.0.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ErrorKind)> {
        self.0.iter().map(|(field, kind)| (field.as_str(), *kind))
    }

    /// Human-readable message per field, for inline rendering
    pub fn messages(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(field, kind)| (field.to_string(), describe(field, kind)))
            .collect()
    }
}

/// Message for a field failure, worded for the person filling in the form
pub fn describe(field: &str, kind: ErrorKind) -> String {
    match (field, kind) {
        (_, ErrorKind::Required) => "This field is required.".to_string(),
        (fields::ITEM_NAME, ErrorKind::TooShort) => {
            format!("Item name must be at least {} characters long.", ITEM_NAME_MIN)
        }
        (fields::ITEM_NAME, ErrorKind::TooLong) => {
            format!("Item name cannot exceed {} characters.", ITEM_NAME_MAX)
        }
        (fields::DESCRIPTION, ErrorKind::TooShort) => {
            format!("Description must be at least {} characters long.", DESCRIPTION_MIN)
        }
        (fields::DESCRIPTION, ErrorKind::TooLong) => {
            format!("Description cannot exceed {} characters.", DESCRIPTION_MAX)
        }
        (fields::LOCATION, ErrorKind::TooShort) => {
            format!("Location must be at least {} characters long.", LOCATION_MIN)
        }
        (fields::LOCATION, ErrorKind::TooLong) => {
            format!("Location cannot exceed {} characters.", LOCATION_MAX)
        }
        (fields::COLOR, ErrorKind::TooLong) => {
            format!("Color cannot exceed {} characters.", COLOR_MAX)
        }
        (fields::BRAND, ErrorKind::TooLong) => {
            format!("Brand cannot exceed {} characters.", BRAND_MAX)
        }
        (fields::CONTACT_NAME, ErrorKind::TooLong) => {
            format!("Name cannot exceed {} characters.", CONTACT_NAME_MAX)
        }
        (fields::CONTACT_EMAIL, ErrorKind::InvalidFormat) => {
            "Enter a valid email address.".to_string()
        }
        (fields::CONTACT_PHONE, ErrorKind::InvalidFormat) => {
            "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed."
                .to_string()
        }
        (fields::ITEM_TYPE, ErrorKind::InvalidChoice) => {
            "Select a valid item type.".to_string()
        }
        (fields::IMAGE, ErrorKind::TooLarge) => "Image file size cannot exceed 5MB.".to_string(),
        (fields::IMAGE, ErrorKind::UnsupportedType) => {
            "Only JPEG, PNG, and GIF images are allowed.".to_string()
        }
        (fields::PROOF_DESCRIPTION, ErrorKind::TooShort) => format!(
            "Please provide more detailed proof of ownership (at least {} characters).",
            PROOF_MIN
        ),
        (field, kind) => format!("{}: {}", field, kind),
    }
}
