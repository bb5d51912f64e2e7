/// Navi open-API payload types
///
/// List endpoints are decoded as raw `Value` entries. Callers select entries by
/// their string keys and only decode the selected ones into `NaviPool` or
/// `NaviReward`, so an unrelated malformed neighbour never fails a lookup.
///
/// Numeric fields arrive either as JSON numbers or as numeric strings, so they
/// are kept as raw `Value`s and coerced by the staking layer, where a bad value
/// has request-level meaning.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// String field `key` of a raw list entry
pub fn str_field<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}

/// List endpoints answer either with a bare array or `{ "data": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Wrapped { data } => data,
        }
    }
}

/// One entry of `/api/navi/pools`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaviPool {
    #[serde(default)]
    pub coin_type: Option<String>,
    /// Milliseconds since epoch
    #[serde(default)]
    pub last_update_timestamp: Option<Value>,
    #[serde(default)]
    pub supply_incentive_apy_info: Option<ApyInfo>,
    /// Raw amount in 1e-9 units
    #[serde(default)]
    pub total_supply_amount: Option<Value>,
    #[serde(default)]
    pub oracle: Option<OracleInfo>,
}

impl NaviPool {
    pub fn from_entry(entry: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(entry)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApyInfo {
    #[serde(default)]
    pub apy: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleInfo {
    #[serde(default)]
    pub price: Option<Value>,
}

/// One entry of `/api/navi/user/rewards`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NaviReward {
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    pub coin_type: Option<String>,
    /// Raw amount in 1e-9 units
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub token_price: Option<Value>,
}

impl NaviReward {
    pub fn from_entry(entry: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(entry)
    }
}

/// Number or numeric string as `f64`
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Integer (or integral string) as `i64`; floats are truncated
pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
