/// Navi protocol open-API client
///
/// API: https://open-api.naviprotocol.io
///
/// Endpoints implemented:
/// 1. /api/navi/pools - All lending pools with their latest state
/// 2. /api/navi/user/rewards?userAddress={address} - Incentive rewards of a user
pub mod types;

pub use self::types::{str_field, ListPayload, NaviPool, NaviReward};

use crate::apis::client::HttpClient;
use crate::config::AdvisorConfig;
use crate::errors::ApiError;
use crate::logger::{self, LogTag};
use serde_json::Value;
use std::time::Instant;

/// Number of payload records echoed in debug logs
const DEBUG_PREVIEW_RECORDS: usize = 2;

pub struct NaviClient {
    http_client: HttpClient,
    pools_url: String,
    rewards_url: String,
}

impl NaviClient {
    pub fn new(pools_url: &str, rewards_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            pools_url: pools_url.to_string(),
            rewards_url: rewards_url.to_string(),
        })
    }

    pub fn from_config(config: &AdvisorConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.pools_api_url,
            &config.rewards_api_url,
            config.request_timeout_secs,
        )
    }

    pub fn pools_url(&self) -> &str {
        &self.pools_url
    }

    /// Fetch the full pools list as raw entries
    pub async fn fetch_pools(&self) -> Result<Vec<Value>, ApiError> {
        let request = self.http_client.client().get(&self.pools_url);
        self.fetch_list(request, "pools").await
    }

    /// Fetch every reward recorded for `user_address` as raw entries
    pub async fn fetch_user_rewards(&self, user_address: &str) -> Result<Vec<Value>, ApiError> {
        let request = self
            .http_client
            .client()
            .get(&self.rewards_url)
            .query(&[("userAddress", user_address)]);
        self.fetch_list(request, "rewards").await
    }

    async fn fetch_list(&self, request: reqwest::RequestBuilder, what: &str) -> Result<Vec<Value>, ApiError> {
        let start = Instant::now();
        let timeout_secs = self.http_client.timeout_secs();

        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, timeout_secs))?;

        let status = response.status();
        logger::debug(
            LogTag::Api,
            &format!(
                "Navi {} responded with {} in {}ms",
                what,
                status.as_u16(),
                start.elapsed().as_millis()
            ),
        );

        if status.as_u16() != 200 {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let payload: ListPayload<Value> = response
            .json()
            .await
            .map_err(|e| ApiError::from_reqwest(e, timeout_secs))?;
        let items = payload.into_vec();

        logger::debug(
            LogTag::Api,
            &format!(
                "Navi {} payload: {} records, first {:?}",
                what,
                items.len(),
                &items[..items.len().min(DEBUG_PREVIEW_RECORDS)]
            ),
        );

        Ok(items)
    }
}
