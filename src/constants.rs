/// Global constants used across the advisor
///
/// Fixed upstream identifiers, fallback pool values and the tuning knobs of the
/// synthetic history and prediction heuristics. Values that operators may want
/// to override (endpoints, port, timeout) are only the *defaults* here; see
/// `config` for the resolved runtime values.

// ============================================================================
// UPSTREAM ENDPOINTS
// ============================================================================

/// Navi pools list endpoint
pub const NAVI_POOLS_API: &str = "https://open-api.naviprotocol.io/api/navi/pools";

/// Navi per-user rewards endpoint (queried with `?userAddress=<address>`)
pub const NAVI_REWARDS_API: &str = "https://open-api.naviprotocol.io/api/navi/user/rewards";

/// Upstream request timeout
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// POOL IDENTIFIERS
// ============================================================================

/// Coin type of the SUI/vSUI pool tracked by `/api/volo-data`
pub const DEFAULT_POOL_ID: &str = "0x2::sui::SUI";

/// Pool id that NAVX incentive rewards are reported under
pub const REWARDS_POOL_ID: &str =
    "0x96df0fce3c471489f4debaaa762cf960b3d97820bd1f3f025ff8190730e958c5";

/// Reward coin types must end with this suffix
pub const NAVX_COIN_SUFFIX: &str = "::navx::NAVX";

// ============================================================================
// FALLBACK POOL VALUES
// ============================================================================

/// Supply incentive APY (percent) used when upstream omits it
pub const DEFAULT_APR: f64 = 4.908;

/// Raw total supply amount used when upstream omits it
pub const DEFAULT_TOTAL_SUPPLY_RAW: f64 = 52_969_686_454_591_258.0;

/// Oracle SUI price used when upstream omits it
pub const DEFAULT_SUI_PRICE: f64 = 4.34833514;

/// NAVX token price used when a reward omits it
pub const DEFAULT_NAVX_PRICE: f64 = 0.144426003098488;

/// Raw on-chain amounts are expressed in 1e-9 units
pub const AMOUNT_SCALE: f64 = 1e9;

// ============================================================================
// SYNTHETIC HISTORY
// ============================================================================

/// Days of synthetic history generated per request by default
pub const DEFAULT_HISTORY_DAYS: i64 = 30;

/// Upper bound accepted for the `days` query parameter
pub const MAX_HISTORY_DAYS: i64 = 365;

/// APR grows by this fraction per step of its 5-day cycle
pub const APR_STEP: f64 = 0.01;
pub const APR_CYCLE: i64 = 5;

/// TVL shrinks by this fraction per step of its 7-day cycle
pub const TVL_STEP: f64 = 0.005;
pub const TVL_CYCLE: i64 = 7;

/// SUI price grows by this fraction per step of its 3-day cycle
pub const PRICE_STEP: f64 = 0.02;
pub const PRICE_CYCLE: i64 = 3;

// ============================================================================
// PREDICTION
// ============================================================================

/// Below this many samples the predictor answers `false`
pub const MIN_PREDICTION_SAMPLES: usize = 5;

/// Predicted APR must exceed the mean APR by this factor
pub const FAVORABLE_APR_RATIO: f64 = 1.1;

// ============================================================================
// WEBSERVER
// ============================================================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
