use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{Claim, ItemType, ReportKind};

/// Lifecycle state of a persisted report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Active,
    Claimed,
    Resolved,
}

/// Workflow errors raised when mutating a persisted report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("only the owner of report {0} may change it")]
    NotOwner(Uuid),

    #[error("report {0} is a lost report and cannot be claimed")]
    NotClaimable(Uuid),

    #[error("users cannot claim their own report {0}")]
    OwnReport(Uuid),

    #[error("report {0} is already resolved")]
    AlreadyResolved(Uuid),

    #[error("claim {0} targets a different report")]
    WrongReport(Uuid),

    #[error("claim {0} has already been decided")]
    ClaimDecided(Uuid),
}

/// Binary image attached to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Stored reference to an accepted image; the bytes live with the file-storage collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageMeta {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Descriptive fields shared by lost and found reports, already normalized
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDetails {
    pub item_name: String,
    pub color: String,
    /// Always set for validated reports; legacy rows may lack it.
    #[serde(default)]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub brand: Option<String>,
    pub description: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default)]
    pub image: Option<ImageMeta>,
}

/// A validated report that has not been assigned an identifier yet
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewItemReport {
    kind: ReportKind,
    details: ItemDetails,
    owner: Uuid,
    created_at: DateTime<Utc>,
}

impl NewItemReport {
    pub(crate) fn new(
        kind: ReportKind,
        details: ItemDetails,
        owner: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            details,
            owner,
            created_at,
        }
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Called by the persistence layer once it has allocated an id
    pub fn into_report(self, id: Uuid) -> ItemReport {
        ItemReport {
            id,
            kind: self.kind,
            details: self.details,
            owner: self.owner,
            created_at: self.created_at,
            status: ReportStatus::Active,
        }
    }
}

/// A persisted lost or found item report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemReport {
    pub id: Uuid,
    kind: ReportKind,
    details: ItemDetails,
    owner: Uuid,
    created_at: DateTime<Utc>,
    #[serde(default)]
    status: ReportStatus,
}

impl ItemReport {
    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn is_resolved(&self) -> bool {
        self.status == ReportStatus::Resolved
    }

    /// Close the report. Only the owner may do this.
    pub fn mark_resolved(&mut self, user: Uuid) -> Result<(), ReportError> {
        if user != self.owner {
            return Err(ReportError::NotOwner(self.id));
        }
        self.status = ReportStatus::Resolved;
        Ok(())
    }

    /// Record a pending claim against a found report
    pub fn attach_claim(&mut self, claim: &Claim) -> Result<(), ReportError> {
        if claim.report_id() != self.id {
            return Err(ReportError::WrongReport(claim.id()));
        }
        if self.kind != ReportKind::Found {
            return Err(ReportError::NotClaimable(self.id));
        }
        if claim.claimant() == self.owner {
            return Err(ReportError::OwnReport(self.id));
        }
        if self.is_resolved() {
            return Err(ReportError::AlreadyResolved(self.id));
        }
        self.status = ReportStatus::Claimed;
        Ok(())
    }
}
