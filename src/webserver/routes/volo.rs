use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    constants::MAX_HISTORY_DAYS,
    errors::AdvisorError,
    logger::{self, LogTag},
    staking::{self, MarketSample, PoolReport},
    webserver::{
        state::AppState,
        utils::{advisor_error_response, error_response, success_response},
    },
};

// =============================================================================
// REQUEST / RESPONSE TYPES
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PoolQuery {
    pub pool_id: Option<String>,
    pub days: Option<String>,
}

/// GET /api/volo-data/predict
#[derive(Debug, Serialize)]
pub struct PoolPredictionResponse {
    pub predict: bool,
    pub predicted_apr: Option<f64>,
    pub mean_apr: Option<f64>,
    pub samples: usize,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/volo-data", get(get_volo_data))
        .route("/volo-data/predict", get(get_volo_prediction))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// GET /api/volo-data
async fn get_volo_data(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PoolQuery>, QueryRejection>,
) -> Response {
    let params = match query_params(params) {
        Ok(params) => params,
        Err(response) => return response,
    };

    match load_report(&state, &params).await {
        Ok(report) => {
            logger::debug(
                LogTag::Webserver,
                &format!("Returning pool data: {:?}", report.latest),
            );
            success_response(report)
        }
        Err(e) => advisor_error_response(&e),
    }
}

/// GET /api/volo-data/predict
async fn get_volo_prediction(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PoolQuery>, QueryRejection>,
) -> Response {
    let params = match query_params(params) {
        Ok(params) => params,
        Err(response) => return response,
    };

    let report = match load_report(&state, &params).await {
        Ok(report) => report,
        Err(e) => return advisor_error_response(&e),
    };

    let samples: Vec<MarketSample> = report.samples();
    let count = samples.len();

    let evaluation = tokio::task::spawn_blocking(move || staking::evaluate(&samples)).await;

    match evaluation {
        Ok(prediction) => success_response(PoolPredictionResponse {
            predict: prediction.map_or(false, |p| p.favorable),
            predicted_apr: prediction.map(|p| p.predicted_apr),
            mean_apr: prediction.map(|p| p.mean_apr),
            samples: count,
        }),
        Err(e) => {
            let err = AdvisorError::Unexpected(format!("Prediction task failed: {}", e));
            logger::error(LogTag::Predictor, &err.to_string());
            advisor_error_response(&err)
        }
    }
}

/// Unwrap the query or answer with a JSON 400
fn query_params(params: Result<Query<PoolQuery>, QueryRejection>) -> Result<PoolQuery, Response> {
    params.map(|Query(params)| params).map_err(|rejection| {
        logger::warning(
            LogTag::Webserver,
            &format!("Invalid pool query: {}", rejection.body_text()),
        );
        error_response(
            StatusCode::BAD_REQUEST,
            "invalid_query",
            &rejection.body_text(),
        )
    })
}

async fn load_report(state: &AppState, params: &PoolQuery) -> Result<PoolReport, AdvisorError> {
    let days = parse_days(params.days.as_deref(), state.config.history_days)?;
    let pool_id = params
        .pool_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(state.config.pool_id.as_str());

    staking::fetch_pool(&state.navi, pool_id, days).await
}

/// `days` query value, defaulting when absent
pub(crate) fn parse_days(raw: Option<&str>, default: i64) -> Result<i64, AdvisorError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(default);
    };

    match raw.parse::<i64>() {
        Ok(days) if (0..=MAX_HISTORY_DAYS).contains(&days) => Ok(days),
        _ => Err(AdvisorError::Validation(format!(
            "days must be an integer between 0 and {}",
            MAX_HISTORY_DAYS
        ))),
    }
}
