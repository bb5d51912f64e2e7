use axum::{body::Bytes, http::StatusCode, response::Response, routing::post, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    errors::AdvisorError,
    logger::{self, LogTag},
    staking::{self, MarketSample},
    webserver::{
        state::AppState,
        utils::{error_response, success_response},
    },
};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predict: bool,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/predict", post(predict_handler))
}

/// Parse `{apr, tvl, sui_price}`; all three are required numbers
///
/// Only a JSON object is accepted, positional arrays are rejected.
pub(crate) fn parse_predict_body(body: &[u8]) -> Result<MarketSample, AdvisorError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AdvisorError::Validation("No input data".to_string()));
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| AdvisorError::Validation(e.to_string()))?;
    if !value.is_object() {
        return Err(AdvisorError::Validation(
            "Input must be a JSON object".to_string(),
        ));
    }

    MarketSample::deserialize(&value).map_err(|e| AdvisorError::Validation(e.to_string()))
}

/// POST /api/predict
///
/// The body is a single observation, so the answer follows the predictor's
/// short-series rule.
async fn predict_handler(body: Bytes) -> Response {
    let input = match parse_predict_body(&body) {
        Ok(input) => input,
        Err(e) => {
            logger::error(LogTag::Predictor, &format!("Invalid prediction input: {}", e));
            return error_response(StatusCode::BAD_REQUEST, e.kind(), "Invalid input data");
        }
    };

    let predict = staking::predict(&[input]);
    logger::debug(LogTag::Predictor, &format!("Prediction result: {}", predict));
    success_response(PredictResponse { predict })
}
