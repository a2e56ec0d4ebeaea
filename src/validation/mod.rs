//! Input validation for item reports and ownership claims
//!
//! 1. **Normalizers** rewrite raw input into canonical form (never reject)
//! 2. **Validators** check one normalized field each
//! 3. **ReportValidator** / **validate_claim** run every rule over a
//!    submission and return either the normalized record or all field errors
//!
//! ```ignore
//! let submission = ReportSubmission::new(ReportKind::Lost)
//!     .field(fields::ITEM_NAME, "Wallet")
//!     .field(fields::CONTACT_EMAIL, " USER@Example.COM ");
//!
//! match ReportValidator::default().validate(&submission, owner, &snapshot) {
//!     Ok(validated) => store(validated.report),
//!     Err(errors) => render(errors.messages()),
//! }
//! ```

pub mod claim;
pub mod errors;
pub mod normalizers;
pub mod report;
pub mod validators;

pub use claim::{validate_claim, ClaimSubmission};
pub use errors::{describe, ErrorKind, FieldErrors};
pub use normalizers::{normalize_email, normalize_optional, normalize_phone, normalize_text};
pub use report::{Advisory, ReportSubmission, ReportValidator, ValidatedReport};
pub use validators::{
    validate_brand, validate_color, validate_contact_name, validate_description, validate_email,
    validate_image, validate_item_name, validate_item_type, validate_length, validate_location,
    validate_phone, validate_proof,
};

/// Submission field names
pub mod fields {
    pub const ITEM_NAME: &str = "item_name";
    pub const COLOR: &str = "color";
    pub const ITEM_TYPE: &str = "item_type";
    pub const BRAND: &str = "brand";
    pub const DESCRIPTION: &str = "description";
    pub const LOCATION: &str = "location";
    pub const CONTACT_NAME: &str = "contact_name";
    pub const CONTACT_EMAIL: &str = "contact_email";
    pub const CONTACT_PHONE: &str = "contact_phone";
    pub const IMAGE: &str = "image";
    pub const PROOF_DESCRIPTION: &str = "proof_description";
}
