use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait HealthCheck {
    /// Succeeds once the dashboard page answers with a success status again,
    /// meaning a fresh session can be started.
    async fn check(&self) -> Result<()>;
}

pub type HealthCheckBox = Box<dyn HealthCheck + Send + Sync>;
