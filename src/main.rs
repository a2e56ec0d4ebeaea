use anyhow::{Context, Result};
use clap::Parser;
use findit::models::ImageUpload;
use findit::notify::match_notifications;
use findit::store::{JsonSnapshot, ReportSource};
use findit::{DetectorConfig, ReportKind, ReportSubmission, ReportValidator};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Validate a lost or found item report against the existing reports
#[derive(Debug, Parser)]
#[command(name = "findit", version)]
struct Args {
    /// Existing reports, as a JSON array
    #[arg(long, default_value = "reports.json")]
    snapshot: PathBuf,

    /// Submission to validate: `{"kind": "lost", "fields": {...}}`
    #[arg(long)]
    submission: PathBuf,

    /// Optional image to attach
    #[arg(long)]
    image: Option<PathBuf>,

    /// Submitting user; a fresh id is used when omitted
    #[arg(long)]
    owner: Option<Uuid>,

    /// Where the accepted report is written
    #[arg(long, default_value = "validated_report.json")]
    out: PathBuf,

    /// Also append the accepted report to the snapshot
    #[arg(long)]
    commit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("🔎 FindIt - Report Validator");
    info!("============================");

    let source = JsonSnapshot::new(&args.snapshot);
    let mut existing = source.snapshot().await?;
    info!("Using {} reports from {}", existing.len(), source.source_name());

    let raw = tokio::fs::read_to_string(&args.submission)
        .await
        .with_context(|| format!("Failed to read submission {}", args.submission.display()))?;
    let mut submission: ReportSubmission =
        serde_json::from_str(&raw).context("Failed to parse submission")?;

    if let Some(path) = &args.image {
        submission.image = Some(load_image(path).await?);
    }

    let owner = args.owner.unwrap_or_else(Uuid::new_v4);
    let validator = ReportValidator::new(DetectorConfig::from_env());

    let validated = match validator.validate(&submission, owner, &existing) {
        Ok(validated) => validated,
        Err(errors) => {
            warn!("❌ Submission rejected with {} field error(s)", errors.len());
            for (field, message) in errors.messages() {
                println!("   {}: {}", field, message);
            }
            return Err(errors.into());
        }
    };

    let report = validated.report.into_report(Uuid::new_v4());
    let details = report.details();

    println!("✅ Accepted {} report {}", report.kind(), report.id);
    println!("   {} ({})", details.item_name, details.color);
    println!("   {}: {}", report.kind().location_label(), details.location);
    println!(
        "   Contact: {} <{}> {}",
        details.contact_name, details.contact_email, details.contact_phone
    );
    println!();

    for advisory in &validated.advisories {
        println!("⚠️  {} (report {})", advisory.message(), advisory.report_id());
    }

    let notifications = if report.kind() == ReportKind::Found {
        match_notifications(&report, &validated.advisories, &existing)
    } else {
        Vec::new()
    };
    if !notifications.is_empty() {
        info!("📬 {} owner(s) would be notified of a possible match", notifications.len());
    }

    let output = json!({
        "report": &report,
        "advisories": &validated.advisories,
        "notifications": &notifications,
    });
    tokio::fs::write(&args.out, serde_json::to_string_pretty(&output)?).await?;
    info!("💾 Saved validated report to {}", args.out.display());

    if args.commit {
        existing.push(report);
        source.save(&existing).await?;
    }

    Ok(())
}

/// Read an image from disk, guessing its MIME type from the extension
async fn load_image(path: &Path) -> Result<ImageUpload> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let content_type = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ImageUpload {
        file_name,
        content_type: content_type.to_string(),
        data,
    })
}
