/// Pool data fetcher
///
/// Looks up one pool in the Navi pools list and turns it into a snapshot plus
/// its synthetic history. A missing pool falls back to the built-in defaults
/// instead of failing.
use chrono::Utc;
use serde_json::Value;

use super::history;
use super::types::{PoolReport, PoolSnapshot};
use crate::apis::navi::{str_field, NaviClient, NaviPool};
use crate::errors::AdvisorError;
use crate::logger::{self, LogTag};

/// Fetch `pool_id` upstream and build its report
pub async fn fetch_pool(
    client: &NaviClient,
    pool_id: &str,
    days: i64,
) -> Result<PoolReport, AdvisorError> {
    logger::debug(
        LogTag::Pools,
        &format!("Requesting Navi pools from {}", client.pools_url()),
    );

    let pools = client.fetch_pools().await.map_err(|e| {
        let err = AdvisorError::from(e);
        logger::error(LogTag::Pools, &format!("Pools fetch failed: {}", err));
        err
    })?;

    build_pool_report(&pools, pool_id, days, Utc::now().timestamp_millis())
}

/// Select `pool_id` from raw `pools` entries and generate `days` of history
///
/// Only the selected entry is decoded; other entries are never inspected
/// beyond their `coinType`.
pub fn build_pool_report(
    pools: &[Value],
    pool_id: &str,
    days: i64,
    now_ms: i64,
) -> Result<PoolReport, AdvisorError> {
    let latest = match pools
        .iter()
        .find(|entry| str_field(entry, "coinType") == Some(pool_id))
    {
        Some(entry) => NaviPool::from_entry(entry)
            .map_err(|e| AdvisorError::Generation(format!("Malformed pool {}: {}", pool_id, e)))
            .and_then(|pool| PoolSnapshot::from_navi_pool(&pool, now_ms)),
        None => {
            logger::warning(
                LogTag::Pools,
                &format!("Pool {} not found upstream, using default pool data", pool_id),
            );
            Ok(PoolSnapshot::fallback(now_ms))
        }
    }
    .and_then(|latest| history::generate(&latest, days).map(|series| (latest, series)));

    let (latest, historical) = latest.map_err(|e| {
        logger::error(LogTag::Pools, &format!("Synthetic history failed: {}", e));
        e
    })?;

    logger::debug(
        LogTag::Pools,
        &format!(
            "Synthetic history (first 5): {:?}",
            &historical[..historical.len().min(5)]
        ),
    );
    logger::info(
        LogTag::Pools,
        &format!(
            "Pool {} loaded: APR={}%, TVL={} SUI, {} synthetic days",
            pool_id,
            latest.apr,
            latest.tvl,
            historical.len()
        ),
    );

    Ok(PoolReport { latest, historical })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_POOL_ID;
    use serde_json::json;

    const NOW_MS: i64 = 1_760_000_000_000;

    fn pool(coin_type: &str, apy: &str) -> Value {
        json!({
            "coinType": coin_type,
            "supplyIncentiveApyInfo": { "apy": apy },
            "lastUpdateTimestamp": "1759990000000"
        })
    }

    #[test]
    fn test_matching_pool_is_used() {
        let pools = vec![pool("0x5d4b::coin::COIN", "3.0"), pool(DEFAULT_POOL_ID, "10.0")];
        let report = build_pool_report(&pools, DEFAULT_POOL_ID, 30, NOW_MS).unwrap();

        assert_eq!(report.latest.apr, 10.0);
        assert_eq!(report.latest.timestamp, 1_759_990_000_000);
        assert_eq!(report.historical.len(), 30);
        assert_eq!(report.historical[0].apr, 10.0);
    }

    #[test]
    fn test_first_match_wins() {
        let pools = vec![pool(DEFAULT_POOL_ID, "6.0"), pool(DEFAULT_POOL_ID, "9.0")];
        let report = build_pool_report(&pools, DEFAULT_POOL_ID, 1, NOW_MS).unwrap();
        assert_eq!(report.latest.apr, 6.0);
    }

    #[test]
    fn test_missing_pool_falls_back() {
        let pools = vec![pool("0x5d4b::coin::COIN", "3.0")];
        let report = build_pool_report(&pools, DEFAULT_POOL_ID, 30, NOW_MS).unwrap();

        assert_eq!(report.latest.apr, 4.908);
        assert_eq!(report.latest.sui_price, 4.34833514);
        assert_eq!(report.latest.timestamp, NOW_MS);
        assert_eq!(report.historical.len(), 30);
    }

    #[test]
    fn test_empty_list_falls_back() {
        let report = build_pool_report(&[], DEFAULT_POOL_ID, 0, NOW_MS).unwrap();
        assert_eq!(report.latest.apr, 4.908);
        assert!(report.historical.is_empty());
    }

    #[test]
    fn test_bad_matching_pool_is_generation_error() {
        let pools = vec![pool(DEFAULT_POOL_ID, "n/a")];
        let err = build_pool_report(&pools, DEFAULT_POOL_ID, 30, NOW_MS).unwrap_err();
        assert_eq!(err.kind(), "generation");

        let pools = vec![json!({ "coinType": DEFAULT_POOL_ID, "oracle": "n/a" })];
        let err = build_pool_report(&pools, DEFAULT_POOL_ID, 30, NOW_MS).unwrap_err();
        assert_eq!(err.kind(), "generation");
    }

    #[test]
    fn test_malformed_neighbours_are_skipped() {
        let pools = vec![
            json!({ "coinType": "0xdba3::usdc::USDC", "oracle": "n/a" }),
            json!({ "coinType": 42, "supplyIncentiveApyInfo": [] }),
            json!("not-a-pool"),
            pool(DEFAULT_POOL_ID, "8.25"),
        ];
        let report = build_pool_report(&pools, DEFAULT_POOL_ID, 3, NOW_MS).unwrap();
        assert_eq!(report.latest.apr, 8.25);
        assert_eq!(report.historical.len(), 3);
    }
}
