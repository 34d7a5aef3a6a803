// Repository trait for dashboard snapshot access
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Fetch one fresh snapshot from the dashboard endpoint.
    async fn fetch_snapshot(&self) -> anyhow::Result<DashboardSnapshot>;
}
