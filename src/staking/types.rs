/// Request-scoped staking data types
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::apis::navi::types::{value_as_f64, value_as_i64, NaviPool};
use crate::constants::{AMOUNT_SCALE, DEFAULT_APR, DEFAULT_SUI_PRICE, DEFAULT_TOTAL_SUPPLY_RAW};
use crate::errors::AdvisorError;

/// Latest state of one pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Supply incentive APY, percent
    pub apr: f64,
    /// Total supply in token units
    pub tvl: f64,
    pub sui_price: f64,
    /// Milliseconds since epoch
    pub timestamp: i64,
}

impl PoolSnapshot {
    /// Snapshot made only of fallback values
    pub fn fallback(now_ms: i64) -> Self {
        Self {
            apr: DEFAULT_APR,
            tvl: DEFAULT_TOTAL_SUPPLY_RAW / AMOUNT_SCALE,
            sui_price: DEFAULT_SUI_PRICE,
            timestamp: now_ms,
        }
    }

    /// Build from an upstream pool, substituting fallbacks field by field
    ///
    /// A field that is present but not numeric is a `Generation` error.
    pub fn from_navi_pool(pool: &NaviPool, now_ms: i64) -> Result<Self, AdvisorError> {
        let fallback = Self::fallback(now_ms);

        let apr = match pool
            .supply_incentive_apy_info
            .as_ref()
            .and_then(|info| info.apy.as_ref())
        {
            Some(v) => value_as_f64(v).ok_or_else(|| invalid_field("supplyIncentiveApyInfo.apy", v))?,
            None => fallback.apr,
        };

        let tvl = match pool.total_supply_amount.as_ref() {
            Some(v) => {
                value_as_f64(v).ok_or_else(|| invalid_field("totalSupplyAmount", v))? / AMOUNT_SCALE
            }
            None => fallback.tvl,
        };

        let sui_price = match pool.oracle.as_ref().and_then(|o| o.price.as_ref()) {
            Some(v) => value_as_f64(v).ok_or_else(|| invalid_field("oracle.price", v))?,
            None => fallback.sui_price,
        };

        let timestamp = match pool.last_update_timestamp.as_ref() {
            Some(v) => value_as_i64(v).ok_or_else(|| invalid_field("lastUpdateTimestamp", v))?,
            None => fallback.timestamp,
        };

        Ok(Self {
            apr,
            tvl,
            sui_price,
            timestamp,
        })
    }

    pub fn sample(&self) -> MarketSample {
        MarketSample {
            apr: self.apr,
            tvl: self.tvl,
            sui_price: self.sui_price,
        }
    }
}

fn invalid_field(field: &str, value: &serde_json::Value) -> AdvisorError {
    AdvisorError::Generation(format!("{} is not numeric: {}", field, value))
}

/// One synthetic day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub timestamp: DateTime<Local>,
    pub apr: f64,
    pub tvl: f64,
    pub sui_price: f64,
}

impl HistoricalRecord {
    pub fn sample(&self) -> MarketSample {
        MarketSample {
            apr: self.apr,
            tvl: self.tvl,
            sui_price: self.sui_price,
        }
    }
}

/// Single observation fed to the predictor
///
/// Also the body of `POST /api/predict`; all three fields are required numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSample {
    pub apr: f64,
    pub tvl: f64,
    pub sui_price: f64,
}

/// `/api/volo-data` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolReport {
    pub latest: PoolSnapshot,
    /// Most recent first
    pub historical: Vec<HistoricalRecord>,
}

impl PoolReport {
    pub fn samples(&self) -> Vec<MarketSample> {
        self.historical.iter().map(HistoricalRecord::sample).collect()
    }
}

/// NAVX reward, amounts in token units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRecord {
    pub amount: f64,
    pub timestamp: String,
    pub token_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::navi::types::{ApyInfo, OracleInfo};
    use serde_json::json;

    #[test]
    fn test_fallback_values() {
        let snap = PoolSnapshot::fallback(1_000);
        assert_eq!(snap.apr, 4.908);
        assert_eq!(snap.tvl, 52969686454591258.0 / 1e9);
        assert_eq!(snap.sui_price, 4.34833514);
        assert_eq!(snap.timestamp, 1_000);
    }

    #[test]
    fn test_partial_pool_uses_fallbacks() {
        let pool = NaviPool {
            coin_type: Some("0x2::sui::SUI".to_string()),
            oracle: Some(OracleInfo {
                price: Some(json!("3.5")),
            }),
            ..Default::default()
        };

        let snap = PoolSnapshot::from_navi_pool(&pool, 42).unwrap();
        assert_eq!(snap.sui_price, 3.5);
        assert_eq!(snap.apr, 4.908);
        assert_eq!(snap.timestamp, 42);
    }

    #[test]
    fn test_scales_total_supply() {
        let pool = NaviPool {
            total_supply_amount: Some(json!("2000000000")),
            supply_incentive_apy_info: Some(ApyInfo { apy: Some(json!(7.25)) }),
            ..Default::default()
        };
        let snap = PoolSnapshot::from_navi_pool(&pool, 0).unwrap();
        assert_eq!(snap.tvl, 2.0);
        assert_eq!(snap.apr, 7.25);
    }

    #[test]
    fn test_malformed_timestamp_is_generation_error() {
        let pool = NaviPool {
            last_update_timestamp: Some(json!("yesterday")),
            ..Default::default()
        };
        let err = PoolSnapshot::from_navi_pool(&pool, 0).unwrap_err();
        assert_eq!(err.kind(), "generation");
    }
}
