/// Staking data and stake-timing heuristic
///
/// - `pools`: pool snapshot lookup with default fallback
/// - `history`: synthetic multi-day series from one snapshot
/// - `rewards`: NAVX reward filtering
/// - `predictor`: regression gate over a series
pub mod history;
pub mod pools;
pub mod predictor;
pub mod rewards;
pub mod types;

pub use pools::fetch_pool;
pub use predictor::{evaluate, predict, StakePrediction};
pub use rewards::fetch_rewards;
pub use types::{HistoricalRecord, MarketSample, PoolReport, PoolSnapshot, RewardRecord};
