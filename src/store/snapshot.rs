use crate::models::ItemReport;
use crate::store::traits::ReportSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reports exported by the persistence layer as a JSON array
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write reports back out, pretty-printed
    pub async fn save(&self, reports: &[ItemReport]) -> Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write snapshot {}", self.path.display()))?;
        info!("💾 Saved {} reports to {}", reports.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ReportSource for JsonSnapshot {
    async fn snapshot(&self) -> Result<Vec<ItemReport>> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .with_context(|| format!("Failed to check snapshot {}", self.path.display()))?;
        if !exists {
            warn!(
                "Snapshot {} not found, treating as empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", self.path.display()))?;

        debug!("Read {} bytes from {}", raw.len(), self.path.display());

        let reports: Vec<ItemReport> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse snapshot {}", self.path.display()))?;

        info!("Loaded {} existing reports from {}", reports.len(), self.path.display());
        Ok(reports)
    }

    fn source_name(&self) -> &'static str {
        "json-snapshot"
    }
}
