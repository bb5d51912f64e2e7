/// Runtime configuration
///
/// Resolution order: built-in defaults, then `.env`, then process environment,
/// then command-line flags.
use crate::constants::{
    DEFAULT_HISTORY_DAYS, DEFAULT_HOST, DEFAULT_POOL_ID, DEFAULT_PORT, NAVI_POOLS_API,
    NAVI_REWARDS_API, REWARDS_POOL_ID, UPSTREAM_TIMEOUT_SECS,
};
use crate::arguments::arg_value_in;
use crate::errors::AdvisorError;
use serde::Serialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorConfig {
    pub host: String,
    pub port: u16,
    pub pools_api_url: String,
    pub rewards_api_url: String,
    pub request_timeout_secs: u64,
    pub history_days: i64,
    /// Pool tracked by `/api/volo-data` when no `pool_id` is given
    pub pool_id: String,
    /// Pool rewards are filtered to when no `pool_id` is given
    pub rewards_pool_id: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            pools_api_url: NAVI_POOLS_API.to_string(),
            rewards_api_url: NAVI_REWARDS_API.to_string(),
            request_timeout_secs: UPSTREAM_TIMEOUT_SECS,
            history_days: DEFAULT_HISTORY_DAYS,
            pool_id: DEFAULT_POOL_ID.to_string(),
            rewards_pool_id: REWARDS_POOL_ID.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Load from `.env`, the process environment and the captured arguments
    pub fn load() -> Result<Self, AdvisorError> {
        dotenv::dotenv().ok();
        Self::from_sources(|key| std::env::var(key).ok(), &crate::arguments::get_cmd_args())
    }

    /// Resolve against an arbitrary environment lookup and argument list
    pub fn from_sources<F>(env: F, args: &[String]) -> Result<Self, AdvisorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let env = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(host) = env("HOST") {
            config.host = host;
        }
        if let Some(port) = env("PORT") {
            config.port = parse_port(&port)?;
        }
        if let Some(url) = env("NAVI_POOLS_API") {
            config.pools_api_url = url;
        }
        if let Some(url) = env("NAVI_REWARDS_API") {
            config.rewards_api_url = url;
        }
        if let Some(secs) = env("UPSTREAM_TIMEOUT_SECS") {
            config.request_timeout_secs = secs
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    AdvisorError::Config(format!("Invalid UPSTREAM_TIMEOUT_SECS: {}", secs))
                })?;
        }

        if let Some(host) = arg_value_in(args, "--host") {
            config.host = host;
        }
        if let Some(port) = arg_value_in(args, "--port") {
            config.port = parse_port(&port)?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AdvisorError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AdvisorError::Config(format!("Invalid bind address: {}", e)))
    }
}

fn parse_port(value: &str) -> Result<u16, AdvisorError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| AdvisorError::Config(format!("Invalid port: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AdvisorConfig::from_sources(env_of(&[]), &[]).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.history_days, 30);
        assert_eq!(cfg.pool_id, "0x2::sui::SUI");
    }

    #[test]
    fn test_env_then_args() {
        let args: Vec<String> = ["volo-advisor", "--port", "7000", "--host", "127.0.0.1"]
            .iter()
            .map(|a| a.to_string())
            .collect();
        let cfg = AdvisorConfig::from_sources(
            env_of(&[("PORT", "6000"), ("NAVI_POOLS_API", "http://127.0.0.1:9/pools")]),
            &args,
        )
        .unwrap();
        assert_eq!(cfg.port, 7000);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:7000");
        assert_eq!(cfg.pools_api_url, "http://127.0.0.1:9/pools");
    }

    #[test]
    fn test_invalid_port() {
        let err = AdvisorConfig::from_sources(env_of(&[("PORT", "abc")]), &[]).unwrap_err();
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_blank_env_ignored() {
        let cfg = AdvisorConfig::from_sources(env_of(&[("PORT", "  ")]), &[]).unwrap();
        assert_eq!(cfg.port, 5000);
    }
}
