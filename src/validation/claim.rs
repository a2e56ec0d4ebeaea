use serde::Deserialize;
use uuid::Uuid;

use super::errors::{ErrorKind, FieldErrors};
use super::fields;
use super::normalizers::{normalize_email, normalize_text};
use super::validators::{validate_email, validate_proof};
use crate::models::Claim;

/// Raw ownership-claim form input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimSubmission {
    #[serde(default)]
    pub proof_description: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// Check a claim against `report_id` on behalf of `claimant`
pub fn validate_claim(
    report_id: Uuid,
    claimant: Uuid,
    submission: &ClaimSubmission,
) -> Result<Claim, FieldErrors> {
    let mut errors = FieldErrors::new();

    let proof = match non_blank(&submission.proof_description) {
        None => {
            errors.add(fields::PROOF_DESCRIPTION, ErrorKind::Required);
            None
        }
        Some(raw) => {
            let proof = normalize_text(raw);
            errors.check(fields::PROOF_DESCRIPTION, validate_proof(&proof));
            Some(proof)
        }
    };

    let email = match non_blank(&submission.contact_email) {
        None => {
            errors.add(fields::CONTACT_EMAIL, ErrorKind::Required);
            None
        }
        Some(raw) => {
            let email = normalize_email(raw);
            errors.check(fields::CONTACT_EMAIL, validate_email(&email));
            Some(email)
        }
    };

    match (proof, email) {
        (Some(proof), Some(email)) if errors.is_empty() => {
            Ok(Claim::new(report_id, claimant, proof, email))
        }
        _ => Err(errors),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimStatus;

    fn submission(proof: &str, email: &str) -> ClaimSubmission {
        ClaimSubmission {
            proof_description: Some(proof.to_string()),
            contact_email: Some(email.to_string()),
        }
    }

    #[test]
    fn short_proof_is_rejected() {
        let proof = "a".repeat(15);
        let errors = validate_claim(
            Uuid::new_v4(),
            Uuid::new_v4(),
            &submission(&proof, "claimer@example.com"),
        )
        .unwrap_err();
        assert_eq!(errors.get("proof_description"), Some(ErrorKind::TooShort));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn detailed_proof_with_valid_email_succeeds() {
        let report_id = Uuid::new_v4();
        let claimant = Uuid::new_v4();
        let proof = "b".repeat(25);
        let claim = validate_claim(
            report_id,
            claimant,
            &submission(&proof, " Claimer@Example.COM "),
        )
        .unwrap();

        assert_eq!(claim.report_id(), report_id);
        assert_eq!(claim.claimant(), claimant);
        assert_eq!(claim.contact_email(), "claimer@example.com");
        assert_eq!(claim.status(), ClaimStatus::Pending);
    }

    #[test]
    fn proof_length_is_measured_after_trimming() {
        let padded = format!("   {}   ", "c".repeat(19));
        let errors = validate_claim(
            Uuid::new_v4(),
            Uuid::new_v4(),
            &submission(&padded, "claimer@example.com"),
        )
        .unwrap_err();
        assert_eq!(errors.get("proof_description"), Some(ErrorKind::TooShort));
    }

    #[test]
    fn missing_fields_are_required() {
        let errors =
            validate_claim(Uuid::new_v4(), Uuid::new_v4(), &ClaimSubmission::default()).unwrap_err();
        assert_eq!(errors.get("proof_description"), Some(ErrorKind::Required));
        assert_eq!(errors.get("contact_email"), Some(ErrorKind::Required));
    }

    #[test]
    fn bad_email_is_reported_alongside_short_proof() {
        let errors = validate_claim(
            Uuid::new_v4(),
            Uuid::new_v4(),
            &submission("Too short", "claimer-at-example"),
        )
        .unwrap_err();
        assert_eq!(errors.get("proof_description"), Some(ErrorKind::TooShort));
        assert_eq!(errors.get("contact_email"), Some(ErrorKind::InvalidFormat));
    }
}
