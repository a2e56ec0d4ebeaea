//! FindIt lost-and-found reporting core
//!
//! Validates lost and found item reports and ownership claims, flags likely
//! duplicates and matches against existing reports, and filters reports for
//! search. Persistence, authentication, and delivery belong to the host
//! application; this crate only sees plain records passed by value.

pub mod config;
pub mod matching;
pub mod models;
pub mod notify;
pub mod search;
pub mod store;
pub mod validation;

pub use config::DetectorConfig;
pub use matching::{Candidate, Candidates, Detector};
pub use models::{Claim, ItemReport, ItemType, NewItemReport, ReportKind};
pub use search::SearchQuery;
pub use validation::{
    validate_claim, Advisory, ClaimSubmission, ErrorKind, FieldErrors, ReportSubmission,
    ReportValidator, ValidatedReport,
};
