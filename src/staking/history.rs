/// Synthetic history generator
///
/// Fabricates `days` of pseudo-historical samples from one snapshot. Each
/// metric is scaled by a fixed cyclic factor of the day index, so the output
/// is a pure function of the snapshot and `days`.
use chrono::{DateTime, Duration, Local, TimeZone, Utc};

use super::types::{HistoricalRecord, PoolSnapshot};
use crate::constants::{APR_CYCLE, APR_STEP, PRICE_CYCLE, PRICE_STEP, TVL_CYCLE, TVL_STEP};
use crate::errors::AdvisorError;

/// APR multiplier for day `i`
pub fn apr_factor(i: i64) -> f64 {
    1.0 + APR_STEP * i.rem_euclid(APR_CYCLE) as f64
}

/// TVL multiplier for day `i`
pub fn tvl_factor(i: i64) -> f64 {
    1.0 - TVL_STEP * i.rem_euclid(TVL_CYCLE) as f64
}

/// SUI price multiplier for day `i`
pub fn price_factor(i: i64) -> f64 {
    1.0 + PRICE_STEP * i.rem_euclid(PRICE_CYCLE) as f64
}

/// Snapshot time as local time, rounded to whole seconds
pub fn base_time(timestamp_ms: i64) -> Result<DateTime<Local>, AdvisorError> {
    let mut secs = timestamp_ms.div_euclid(1000);
    if timestamp_ms.rem_euclid(1000) >= 500 {
        secs += 1;
    }

    Utc.timestamp_opt(secs, 0)
        .single()
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| {
            AdvisorError::Generation(format!("timestamp {} is out of range", timestamp_ms))
        })
}

/// Generate the series, most recent day first
///
/// Record 0 carries the snapshot values unchanged. `days <= 0` yields an empty
/// series.
pub fn generate(base: &PoolSnapshot, days: i64) -> Result<Vec<HistoricalRecord>, AdvisorError> {
    if days <= 0 {
        return Ok(Vec::new());
    }

    let start = base_time(base.timestamp)?;

    (0..days)
        .map(|i| {
            let timestamp = Duration::try_days(i)
                .and_then(|offset| start.checked_sub_signed(offset))
                .ok_or_else(|| {
                    AdvisorError::Generation(format!("day {} before {} is out of range", i, start))
                })?;

            Ok(HistoricalRecord {
                timestamp,
                apr: base.apr * apr_factor(i),
                tvl: base.tvl * tvl_factor(i),
                sui_price: base.sui_price * price_factor(i),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAY_2025_MS: i64 = 1_746_000_000_000;

    fn snapshot() -> PoolSnapshot {
        PoolSnapshot {
            apr: 4.908,
            tvl: 52_969_686.454591258,
            sui_price: 4.34833514,
            timestamp: MAY_2025_MS,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_first_record_is_snapshot() {
        let base = snapshot();
        let series = generate(&base, 30).unwrap();
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].apr, base.apr);
        assert_eq!(series[0].tvl, base.tvl);
        assert_eq!(series[0].sui_price, base.sui_price);
        assert_eq!(series[0].timestamp.timestamp(), MAY_2025_MS / 1000);
    }

    #[test]
    fn test_cyclic_perturbations() {
        let base = snapshot();
        let series = generate(&base, 30).unwrap();

        for (i, record) in series.iter().enumerate() {
            let i = i as i64;
            assert!(close(record.apr, base.apr * (1.0 + 0.01 * (i % 5) as f64)));
            assert!(close(record.tvl, base.tvl * (1.0 - 0.005 * (i % 7) as f64)));
            assert!(close(record.sui_price, base.sui_price * (1.0 + 0.02 * (i % 3) as f64)));
        }

        // Cycle peaks
        assert!(close(series[4].apr, base.apr * 1.04));
        assert!(close(series[6].tvl, base.tvl * 0.97));
        assert!(close(series[5].apr, base.apr));
    }

    #[test]
    fn test_days_step_backwards() {
        let series = generate(&snapshot(), 3).unwrap();
        let day = 86_400;
        assert_eq!(series[0].timestamp.timestamp() - series[1].timestamp.timestamp(), day);
        assert_eq!(series[1].timestamp.timestamp() - series[2].timestamp.timestamp(), day);
    }

    #[test]
    fn test_non_positive_days_is_empty() {
        assert!(generate(&snapshot(), 0).unwrap().is_empty());
        assert!(generate(&snapshot(), -3).unwrap().is_empty());
    }

    #[test]
    fn test_rounds_to_seconds() {
        assert_eq!(base_time(1_499).unwrap().timestamp(), 1);
        assert_eq!(base_time(1_500).unwrap().timestamp(), 2);
    }

    #[test]
    fn test_out_of_range_timestamp_fails() {
        let mut base = snapshot();
        base.timestamp = i64::MAX;
        let err = generate(&base, 5).unwrap_err();
        assert_eq!(err.kind(), "generation");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(&snapshot(), 12).unwrap(), generate(&snapshot(), 12).unwrap());
    }
}
