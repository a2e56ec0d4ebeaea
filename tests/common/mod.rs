#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use findit::{ItemReport, ReportKind, ReportSubmission, ReportValidator};
use uuid::Uuid;

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, d, 9, 30, 0).unwrap()
}

/// The library wallet report used throughout the tests
pub fn wallet(kind: ReportKind) -> ReportSubmission {
    ReportSubmission::new(kind)
        .field("item_name", "Wallet")
        .field("color", "Black")
        .field(
            "description",
            "Black leather wallet lost near the library entrance",
        )
        .field("location", "Main Library")
        .field("contact_name", "Alice Johnson")
        .field("contact_email", " USER@Example.COM ")
        .field("contact_phone", "(555) 123-4567")
        .field("item_type", "wallet")
}

/// Validate and persist a submission as `owner`, created on `d`
pub fn stored(submission: &ReportSubmission, owner: Uuid, d: u32) -> ItemReport {
    ReportValidator::default()
        .validate_at(submission, owner, &[], day(d))
        .expect("fixture submission is valid")
        .report
        .into_report(Uuid::new_v4())
}
