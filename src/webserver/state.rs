/// Shared application state for the webserver
///
/// Everything here is immutable after startup; handlers never share mutable
/// state across requests.
use crate::apis::NaviClient;
use crate::config::AdvisorConfig;
use crate::errors::AdvisorError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AdvisorConfig>,

    /// Upstream client, reused for its connection pool
    pub navi: Arc<NaviClient>,

    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let navi = NaviClient::from_config(&config)
            .map_err(|e| AdvisorError::Config(format!("Failed to build Navi client: {}", e)))?;

        Ok(Self {
            config: Arc::new(config),
            navi: Arc::new(navi),
            startup_time: chrono::Utc::now(),
        })
    }

    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
