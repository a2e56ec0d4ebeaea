//! Input normalization applied before validation
//!
//! Normalizers never reject input. They only rewrite it into the canonical
//! form that validators check and that gets stored.

/// Trim surrounding whitespace and lower-case
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Keep only digits, plus a single `+` if the number starts with one
pub fn normalize_phone(value: &str) -> String {
    let trimmed = value.trim();
    let mut out = String::with_capacity(trimmed.len());

    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));

    out
}

/// Trim leading and trailing whitespace
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Trim an optional value, treating blank as absent
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
