/// Rewards fetcher
///
/// Upstream problems never reach the caller: any failure yields an empty list.
use super::types::RewardRecord;
use crate::apis::navi::types::{str_field, value_as_f64, NaviReward};
use crate::apis::navi::NaviClient;
use crate::constants::{AMOUNT_SCALE, DEFAULT_NAVX_PRICE, NAVX_COIN_SUFFIX};
use crate::errors::AdvisorError;
use crate::logger::{self, LogTag};
use serde_json::Value;

/// NAVX rewards of `user_address` in `pool_id`; empty on any failure
pub async fn fetch_rewards(client: &NaviClient, user_address: &str, pool_id: &str) -> Vec<RewardRecord> {
    let rewards = match client.fetch_user_rewards(user_address).await {
        Ok(rewards) => rewards,
        Err(e) => {
            logger::error(
                LogTag::Rewards,
                &format!("Rewards fetch failed for {}: {}", user_address, e),
            );
            return Vec::new();
        }
    };

    match filter_rewards(&rewards, pool_id) {
        Ok(records) => {
            logger::info(
                LogTag::Rewards,
                &format!("Fetched {} rewards for {}", records.len(), user_address),
            );
            records
        }
        Err(e) => {
            logger::error(
                LogTag::Rewards,
                &format!("Rewards payload rejected for {}: {}", user_address, e),
            );
            Vec::new()
        }
    }
}

/// Keep NAVX rewards of `pool_id`, converting amounts to token units
///
/// Entries are selected on their raw `pool` and `coin_type` strings; only the
/// selected ones are decoded. A selected record that is malformed rejects the
/// batch.
pub fn filter_rewards(rewards: &[Value], pool_id: &str) -> Result<Vec<RewardRecord>, AdvisorError> {
    rewards
        .iter()
        .filter(|entry| {
            str_field(entry, "pool") == Some(pool_id)
                && str_field(entry, "coin_type").map_or(false, |coin| coin.ends_with(NAVX_COIN_SUFFIX))
        })
        .map(|entry| {
            NaviReward::from_entry(entry)
                .map_err(|e| AdvisorError::UpstreamTransport(format!("Malformed reward: {}", e)))
                .and_then(|reward| to_record(&reward))
        })
        .collect()
}

fn to_record(reward: &NaviReward) -> Result<RewardRecord, AdvisorError> {
    let amount = match reward.amount.as_ref() {
        Some(v) => numeric(v, "amount")? / AMOUNT_SCALE,
        None => 0.0,
    };

    let token_price = match reward.token_price.as_ref() {
        Some(v) => numeric(v, "token_price")?,
        None => DEFAULT_NAVX_PRICE,
    };

    let timestamp = match reward.timestamp.as_ref() {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    Ok(RewardRecord {
        amount,
        timestamp,
        token_price,
    })
}

fn numeric(value: &Value, field: &str) -> Result<f64, AdvisorError> {
    value_as_f64(value).ok_or_else(|| {
        AdvisorError::UpstreamTransport(format!("reward {} is not numeric: {}", field, value))
    })
}
