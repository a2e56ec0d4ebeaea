//! Per-field validators
//!
//! Each validator takes an already-normalized value and returns the single
//! `ErrorKind` that describes why it is unacceptable. They are pure: the same
//! input always gets the same verdict.

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::ErrorKind;
use crate::models::ItemType;

pub const ITEM_NAME_MIN: usize = 3;
pub const ITEM_NAME_MAX: usize = 200;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 1000;
pub const LOCATION_MIN: usize = 3;
pub const LOCATION_MAX: usize = 300;
pub const COLOR_MAX: usize = 50;
pub const BRAND_MAX: usize = 100;
pub const CONTACT_NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 254;
pub const PROOF_MIN: usize = 20;

/// 5 MiB
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

lazy_static! {
    /// Local part of printable ASCII, dotted domain of DNS labels
    static ref EMAIL_REGEX: Regex = Regex::new(
        r#"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$"#
    ).unwrap();

    /// Optional `+`, optional trunk `1`, then 9 to 15 digits
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?1?\d{9,15}$").unwrap();
}

/// Validate character count within inclusive bounds
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ErrorKind> {
    let len = value.chars().count();
    if len < min {
        return Err(ErrorKind::TooShort);
    }
    if len > max {
        return Err(ErrorKind::TooLong);
    }
    Ok(())
}

pub fn validate_item_name(value: &str) -> Result<(), ErrorKind> {
    validate_length(value, ITEM_NAME_MIN, ITEM_NAME_MAX)
}

pub fn validate_description(value: &str) -> Result<(), ErrorKind> {
    validate_length(value, DESCRIPTION_MIN, DESCRIPTION_MAX)
}

pub fn validate_location(value: &str) -> Result<(), ErrorKind> {
    validate_length(value, LOCATION_MIN, LOCATION_MAX)
}

pub fn validate_color(value: &str) -> Result<(), ErrorKind> {
    validate_length(value, 1, COLOR_MAX)
}

pub fn validate_brand(value: &str) -> Result<(), ErrorKind> {
    validate_length(value, 1, BRAND_MAX)
}

pub fn validate_contact_name(value: &str) -> Result<(), ErrorKind> {
    validate_length(value, 1, CONTACT_NAME_MAX)
}

pub fn validate_email(value: &str) -> Result<(), ErrorKind> {
    if value.len() > EMAIL_MAX || !EMAIL_REGEX.is_match(value) {
        return Err(ErrorKind::InvalidFormat);
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), ErrorKind> {
    if !PHONE_REGEX.is_match(value) {
        return Err(ErrorKind::InvalidFormat);
    }
    Ok(())
}

/// Size is checked before type, matching the order users fix them in
pub fn validate_image(size_bytes: u64, content_type: &str) -> Result<(), ErrorKind> {
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ErrorKind::TooLarge);
    }
    let content_type = content_type.trim().to_ascii_lowercase();
    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(ErrorKind::UnsupportedType);
    }
    Ok(())
}

pub fn validate_item_type(value: &str) -> Result<ItemType, ErrorKind> {
    value.parse()
}

pub fn validate_proof(value: &str) -> Result<(), ErrorKind> {
    if value.trim().chars().count() < PROOF_MIN {
        return Err(ErrorKind::TooShort);
    }
    Ok(())
}
