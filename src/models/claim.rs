use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::report::ReportError;

/// Decision state of an ownership claim
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Request to reveal a found-item reporter's contact details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claim {
    id: Uuid,
    report_id: Uuid,
    claimant: Uuid,
    proof_description: String,
    contact_email: String,
    #[serde(default)]
    status: ClaimStatus,
    created_at: DateTime<Utc>,
}

impl Claim {
    pub(crate) fn new(
        report_id: Uuid,
        claimant: Uuid,
        proof_description: String,
        contact_email: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            report_id,
            claimant,
            proof_description,
            contact_email,
            status: ClaimStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn report_id(&self) -> Uuid {
        self.report_id
    }

    pub fn claimant(&self) -> Uuid {
        self.claimant
    }

    pub fn proof_description(&self) -> &str {
        &self.proof_description
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn approve(&mut self) -> Result<(), ReportError> {
        self.decide(ClaimStatus::Approved)
    }

    pub fn reject(&mut self) -> Result<(), ReportError> {
        self.decide(ClaimStatus::Rejected)
    }

    fn decide(&mut self, status: ClaimStatus) -> Result<(), ReportError> {
        if self.status != ClaimStatus::Pending {
            return Err(ReportError::ClaimDecided(self.id));
        }
        self.status = status;
        Ok(())
    }
}

/// In-app message delivered to a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub to_user: Uuid,
    pub from_user: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl Notification {
    pub fn new(to_user: Uuid, from_user: Uuid, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            to_user,
            from_user,
            message: message.into(),
            created_at: Utc::now(),
            is_read: false,
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
