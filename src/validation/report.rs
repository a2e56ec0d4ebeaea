use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

use super::errors::{ErrorKind, FieldErrors};
use super::fields;
use super::normalizers::{normalize_email, normalize_optional, normalize_phone, normalize_text};
use super::validators::{
    validate_brand, validate_color, validate_contact_name, validate_description, validate_email,
    validate_image, validate_item_name, validate_item_type, validate_location, validate_phone,
};
use crate::config::DetectorConfig;
use crate::matching::Detector;
use crate::models::{ImageMeta, ImageUpload, ItemDetails, ItemReport, NewItemReport, ReportKind};

/// Raw form input for a lost or found report
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSubmission {
    pub kind: ReportKind,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(skip)]
    pub image: Option<ImageUpload>,
}

impl ReportSubmission {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
            image: None,
        }
    }

    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

/// Non-blocking hint attached to an accepted report
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Advisory {
    PossibleDuplicate { report_id: Uuid, score: f64 },
    PossibleMatch { report_id: Uuid, score: f64 },
}

impl Advisory {
    pub fn report_id(&self) -> Uuid {
        match self {
            Advisory::PossibleDuplicate { report_id, .. }
            | Advisory::PossibleMatch { report_id, .. } => *report_id,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::PossibleDuplicate { .. } => {
                "A similar item has been reported recently. Please check existing reports before submitting."
            }
            Advisory::PossibleMatch { .. } => {
                "A lost item report may match the item you found."
            }
        }
    }
}

/// An accepted report and the hints produced while checking it
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedReport {
    pub report: NewItemReport,
    pub advisories: Vec<Advisory>,
}

/// Validates lost and found submissions alike; the kind only selects the detector
#[derive(Debug, Clone, Default)]
pub struct ReportValidator {
    detector: Detector,
}

impl ReportValidator {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            detector: Detector::new(config),
        }
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Validate against a point-in-time snapshot of existing reports
    pub fn validate(
        &self,
        submission: &ReportSubmission,
        owner: Uuid,
        existing: &[ItemReport],
    ) -> Result<ValidatedReport, FieldErrors> {
        self.validate_at(submission, owner, existing, Utc::now())
    }

    pub fn validate_at(
        &self,
        submission: &ReportSubmission,
        owner: Uuid,
        existing: &[ItemReport],
        now: DateTime<Utc>,
    ) -> Result<ValidatedReport, FieldErrors> {
        let details = self.check_fields(submission)?;
        let kind = submission.kind;
        let report = NewItemReport::new(kind, details, owner, now);

        let advisories: Vec<Advisory> = self
            .detector
            .detect(&report, existing)
            .map(|candidate| {
                let report_id = candidate.report.id;
                let score = candidate.score;
                match kind {
                    ReportKind::Lost => Advisory::PossibleDuplicate { report_id, score },
                    ReportKind::Found => Advisory::PossibleMatch { report_id, score },
                }
            })
            .collect();

        if !advisories.is_empty() {
            info!(
                "{} report '{}' has {} advisory candidate(s)",
                kind,
                report.details().item_name,
                advisories.len()
            );
        }

        Ok(ValidatedReport { report, advisories })
    }

    /// Run every field rule, collecting all failures
    fn check_fields(&self, submission: &ReportSubmission) -> Result<ItemDetails, FieldErrors> {
        let raw = &submission.fields;
        let mut errors = FieldErrors::new();

        let item_name = required(
            raw,
            fields::ITEM_NAME,
            &mut errors,
            normalize_text,
            validate_item_name,
        );
        let color = required(raw, fields::COLOR, &mut errors, normalize_text, validate_color);
        let description = required(
            raw,
            fields::DESCRIPTION,
            &mut errors,
            normalize_text,
            validate_description,
        );
        let location = required(
            raw,
            fields::LOCATION,
            &mut errors,
            normalize_text,
            validate_location,
        );
        let contact_name = required(
            raw,
            fields::CONTACT_NAME,
            &mut errors,
            normalize_text,
            validate_contact_name,
        );
        let contact_email = required(
            raw,
            fields::CONTACT_EMAIL,
            &mut errors,
            normalize_email,
            validate_email,
        );
        let contact_phone = required(
            raw,
            fields::CONTACT_PHONE,
            &mut errors,
            normalize_phone,
            validate_phone,
        );

        let item_type = match present(raw, fields::ITEM_TYPE) {
            None => {
                errors.add(fields::ITEM_TYPE, ErrorKind::Required);
                None
            }
            Some(value) => match validate_item_type(value) {
                Ok(item_type) => Some(item_type),
                Err(kind) => {
                    errors.add(fields::ITEM_TYPE, kind);
                    None
                }
            },
        };

        let brand = normalize_optional(raw.get(fields::BRAND).map(String::as_str));
        if let Some(brand) = &brand {
            errors.check(fields::BRAND, validate_brand(brand));
        }

        let image = submission.image.as_ref().and_then(|upload| {
            match validate_image(upload.size(), &upload.content_type) {
                Ok(()) => Some(ImageMeta {
                    file_name: upload.file_name.clone(),
                    content_type: upload.content_type.trim().to_ascii_lowercase(),
                    size_bytes: upload.size(),
                }),
                Err(kind) => {
                    errors.add(fields::IMAGE, kind);
                    None
                }
            }
        });

        let (
            Some(item_name),
            Some(color),
            Some(item_type),
            Some(description),
            Some(location),
            Some(contact_name),
            Some(contact_email),
            Some(contact_phone),
        ) = (
            item_name,
            color,
            item_type,
            description,
            location,
            contact_name,
            contact_email,
            contact_phone,
        )
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ItemDetails {
            item_name,
            color,
            item_type: Some(item_type),
            brand,
            description,
            location,
            contact_name,
            contact_email,
            contact_phone,
            image,
        })
    }
}

/// Raw value of a field, `None` when missing or blank
fn present<'a>(raw: &'a BTreeMap<String, String>, field: &str) -> Option<&'a str> {
    raw.get(field)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

/// Normalize and validate a required field, recording any failure
fn required(
    raw: &BTreeMap<String, String>,
    field: &str,
    errors: &mut FieldErrors,
    normalize: fn(&str) -> String,
    validate: fn(&str) -> Result<(), ErrorKind>,
) -> Option<String> {
    let Some(value) = present(raw, field) else {
        errors.add(field, ErrorKind::Required);
        return None;
    };
    let normalized = normalize(value);
    match validate(&normalized) {
        Ok(()) => Some(normalized),
        Err(kind) => {
            errors.add(field, kind);
            None
        }
    }
}
