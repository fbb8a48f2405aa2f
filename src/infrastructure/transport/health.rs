#[cfg(test)]
#[path = "health_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::HealthCheck;

/// Polls the dashboard page over plain HTTP. The backend serves the page and
/// the socket from the same listener, so a successful GET means a new socket
/// will be accepted.
pub struct HttpHealthCheck {
    url: String,
    timeout: String,
}

impl Default for HttpHealthCheck {
    fn default() -> HttpHealthCheck {
        return HttpHealthCheck {
            url: Config::get(ConfigKey::Url),
            timeout: Config::get(ConfigKey::HealthCheckTimeout),
        };
    }
}

#[async_trait]
impl HealthCheck for HttpHealthCheck {
    #[allow(clippy::implicit_return)]
    async fn check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::debug!(error = ?err, "Backend is not reachable");
                bail!("Backend is not reachable");
            }
        };

        if !res.status().is_success() {
            tracing::debug!(status = res.status().as_u16(), "Backend health check failed");
            bail!("Backend health check failed");
        }

        return Ok(());
    }
}
