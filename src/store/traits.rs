use crate::models::ItemReport;
use anyhow::Result;
use async_trait::async_trait;

/// Supplier of the existing-reports snapshot fed to the detector.
/// The persistence layer owns the data; this is only a read seam.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Point-in-time copy of stored reports
    async fn snapshot(&self) -> Result<Vec<ItemReport>>;

    /// Get the name of the source, for logs
    fn source_name(&self) -> &'static str;
}

#[async_trait]
impl ReportSource for Vec<ItemReport> {
    async fn snapshot(&self) -> Result<Vec<ItemReport>> {
        Ok(self.clone())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
