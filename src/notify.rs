use tracing::debug;

use crate::models::{Claim, ItemReport, Notification};
use crate::validation::Advisory;

/// Tell the finder that someone has claimed their report
pub fn claim_notification(claim: &Claim, report: &ItemReport, claimant_name: &str) -> Notification {
    Notification::new(
        report.owner(),
        claim.claimant(),
        format!(
            "{} has claimed the item you found: {}",
            claimant_name,
            report.details().item_name
        ),
    )
}

/// Tell owners of lost reports that a newly stored found report may be theirs.
/// Advisories pointing at reports missing from `existing` are skipped.
pub fn match_notifications(
    found: &ItemReport,
    advisories: &[Advisory],
    existing: &[ItemReport],
) -> Vec<Notification> {
    advisories
        .iter()
        .filter_map(|advisory| match advisory {
            Advisory::PossibleMatch { report_id, .. } => {
                existing.iter().find(|r| r.id == *report_id)
            }
            Advisory::PossibleDuplicate { .. } => None,
        })
        .filter(|lost| lost.owner() != found.owner())
        .map(|lost| {
            debug!("Notifying owner of report {} about found report {}", lost.id, found.id);
            Notification::new(
                lost.owner(),
                found.owner(),
                format!(
                    "A found item may match your lost report: {}",
                    lost.details().item_name
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::fixtures::{at, details, report};
    use crate::models::{ItemType, ReportKind};
    use crate::validation::{validate_claim, ClaimSubmission};
    use uuid::Uuid;

    #[test]
    fn claim_notifies_the_finder() {
        let found = report(
            ReportKind::Found,
            details(ItemType::Wallet, "Main Library", "Black leather wallet"),
            at(2),
        );
        let claimant = Uuid::new_v4();
        let claim = validate_claim(
            found.id,
            claimant,
            &ClaimSubmission {
                proof_description: Some("Library card inside with my name on it".to_string()),
                contact_email: Some("owner@example.com".to_string()),
            },
        )
        .unwrap();

        let note = claim_notification(&claim, &found, "jdoe");
        assert_eq!(note.to_user, found.owner());
        assert_eq!(note.from_user, claimant);
        assert_eq!(note.message, "jdoe has claimed the item you found: Wallet");
        assert!(!note.is_read);
    }

    #[test]
    fn matches_notify_lost_owners_only() {
        let lost = report(
            ReportKind::Lost,
            details(ItemType::Wallet, "Main Library", "Black leather wallet"),
            at(1),
        );
        let found = report(
            ReportKind::Found,
            details(ItemType::Wallet, "Main Library", "Black leather wallet"),
            at(2),
        );
        let advisories = vec![
            Advisory::PossibleMatch {
                report_id: lost.id,
                score: 1.0,
            },
            Advisory::PossibleMatch {
                report_id: Uuid::new_v4(),
                score: 0.5,
            },
            Advisory::PossibleDuplicate {
                report_id: lost.id,
                score: 1.0,
            },
        ];

        let notes = match_notifications(&found, &advisories, &[lost.clone()]);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].to_user, lost.owner());
        assert_eq!(notes[0].from_user, found.owner());
    }
}
