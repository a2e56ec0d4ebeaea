mod common;

use common::{day, stored, wallet};
use findit::search::recent;
use findit::{
    Advisory, DetectorConfig, ErrorKind, ItemType, ReportKind, ReportValidator, SearchQuery,
};
use uuid::Uuid;

#[test]
fn wallet_example_is_normalized() {
    let validated = ReportValidator::default()
        .validate(&wallet(ReportKind::Lost), Uuid::new_v4(), &[])
        .expect("wallet report is valid");

    let details = validated.report.details();
    assert_eq!(details.contact_email, "user@example.com");
    assert_eq!(details.contact_phone, "5551234567");
    assert_eq!(details.item_type, Some(ItemType::Wallet));
    assert!(validated.advisories.is_empty());
}

#[test]
fn short_item_name_fails_regardless_of_other_fields() {
    let validator = ReportValidator::default();
    let variants = [
        wallet(ReportKind::Lost).field("item_name", "AB"),
        wallet(ReportKind::Found).field("item_name", "X"),
        wallet(ReportKind::Lost)
            .field("item_name", "ab")
            .field("contact_email", "broken")
            .field("description", "tiny"),
    ];

    for submission in &variants {
        let errors = validator
            .validate(submission, Uuid::new_v4(), &[])
            .unwrap_err();
        assert_eq!(errors.get("item_name"), Some(ErrorKind::TooShort));
    }
}

#[test]
fn description_boundaries() {
    let validator = ReportValidator::default();
    for (len, expected) in [
        (9, Some(ErrorKind::TooShort)),
        (10, None),
        (1000, None),
        (1001, Some(ErrorKind::TooLong)),
    ] {
        let submission = wallet(ReportKind::Lost).field("description", "w".repeat(len));
        let outcome = validator.validate(&submission, Uuid::new_v4(), &[]);
        match expected {
            None => assert!(outcome.is_ok(), "length {len} should pass"),
            Some(kind) => assert_eq!(outcome.unwrap_err().get("description"), Some(kind)),
        }
    }
}

#[test]
fn renormalizing_stored_contact_details_changes_nothing() {
    let validator = ReportValidator::default();
    let first = validator
        .validate(&wallet(ReportKind::Lost), Uuid::new_v4(), &[])
        .unwrap();
    let details = first.report.details();

    let again = wallet(ReportKind::Lost)
        .field("contact_email", details.contact_email.clone())
        .field("contact_phone", details.contact_phone.clone());
    let second = validator.validate(&again, Uuid::new_v4(), &[]).unwrap();

    assert_eq!(second.report.details().contact_email, details.contact_email);
    assert_eq!(second.report.details().contact_phone, details.contact_phone);
}

#[test]
fn later_lost_report_flags_earlier_one() {
    let earlier = stored(&wallet(ReportKind::Lost), Uuid::new_v4(), 10);
    let later = wallet(ReportKind::Lost).field(
        "description",
        "Lost my black leather wallet by the library doors",
    );

    let validated = ReportValidator::default()
        .validate_at(&later, Uuid::new_v4(), &[earlier.clone()], day(12))
        .expect("advisories never block");

    assert_eq!(validated.advisories.len(), 1);
    assert!(matches!(
        validated.advisories[0],
        Advisory::PossibleDuplicate { .. }
    ));
    assert_eq!(validated.advisories[0].report_id(), earlier.id);
}

#[test]
fn found_report_flags_open_lost_report() {
    let lost = stored(&wallet(ReportKind::Lost), Uuid::new_v4(), 1);
    let found = wallet(ReportKind::Found)
        .field("description", "Found a black leather wallet at the library entrance")
        .field("location", "main library, front desk");

    let validated = ReportValidator::default()
        .validate_at(&found, Uuid::new_v4(), &[lost.clone()], day(20))
        .unwrap();

    assert_eq!(validated.advisories.len(), 1);
    assert!(matches!(
        validated.advisories[0],
        Advisory::PossibleMatch { .. }
    ));
    assert_eq!(validated.advisories[0].report_id(), lost.id);
}

#[test]
fn tuned_threshold_suppresses_weak_duplicates() {
    let earlier = stored(&wallet(ReportKind::Lost), Uuid::new_v4(), 10);
    let later = wallet(ReportKind::Lost).field("description", "Black wallet, library, cards inside");

    let strict = ReportValidator::new(DetectorConfig {
        overlap_threshold: 0.9,
        ..DetectorConfig::default()
    });
    let validated = strict
        .validate_at(&later, Uuid::new_v4(), &[earlier], day(11))
        .unwrap();
    assert!(validated.advisories.is_empty());
}

#[test]
fn oversized_duplicate_window_still_validates() {
    let earlier = stored(&wallet(ReportKind::Lost), Uuid::new_v4(), 1);
    let validator = ReportValidator::new(DetectorConfig {
        duplicate_window_days: 100_000_000,
        ..DetectorConfig::default()
    });

    let validated = validator
        .validate_at(&wallet(ReportKind::Lost), Uuid::new_v4(), &[earlier.clone()], day(20))
        .unwrap();
    assert_eq!(validated.advisories.len(), 1);
    assert_eq!(validated.advisories[0].report_id(), earlier.id);
}

#[test]
fn search_and_recent_listings() {
    let owner = Uuid::new_v4();
    let reports = vec![
        stored(&wallet(ReportKind::Lost), owner, 1),
        stored(
            &wallet(ReportKind::Found)
                .field("item_name", "Silver Watch")
                .field("item_type", "jewelry")
                .field("description", "Silver watch with a leather strap")
                .field("location", "Park Bench, City Park"),
            owner,
            2,
        ),
        stored(
            &wallet(ReportKind::Found)
                .field("item_name", "Red Scarf")
                .field("item_type", "clothing")
                .field("description", "Handknit red wool scarf with fringe")
                .field("location", "Coffee Shop, Main Street"),
            owner,
            3,
        ),
    ];

    let leather = SearchQuery::new().with_query("LEATHER");
    assert_eq!(leather.filter(&reports).count(), 2);

    let park_jewelry = SearchQuery::new()
        .with_location("city park")
        .with_item_type(ItemType::Jewelry);
    let hits: Vec<_> = park_jewelry.filter(&reports).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].details().item_name, "Silver Watch");

    let newest_found = recent(&reports, ReportKind::Found, 3);
    let names: Vec<_> = newest_found
        .iter()
        .map(|r| r.details().item_name.as_str())
        .collect();
    assert_eq!(names, vec!["Red Scarf", "Silver Watch"]);
}
