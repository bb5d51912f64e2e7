use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    logger::{self, LogTag},
    staking,
    webserver::{
        state::AppState,
        utils::{error_response, success_response},
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct RewardsQuery {
    pub user_address: Option<String>,
    pub pool_id: Option<String>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/rewards", get(get_rewards))
}

/// GET /api/rewards?user_address=<address>
///
/// Always 200 once the address is present; upstream failures yield `[]`.
/// The address is forwarded exactly as given.
async fn get_rewards(
    State(state): State<Arc<AppState>>,
    params: Result<Query<RewardsQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            logger::error(
                LogTag::Rewards,
                &format!("Invalid rewards query: {}", rejection.body_text()),
            );
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_query",
                &rejection.body_text(),
            );
        }
    };

    let Some(user_address) = params.user_address.as_deref().filter(|a| !a.is_empty()) else {
        logger::error(LogTag::Rewards, "Missing user_address parameter");
        return error_response(
            StatusCode::BAD_REQUEST,
            "missing_user_address",
            "Missing user_address parameter",
        );
    };

    let pool_id = params
        .pool_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(state.config.rewards_pool_id.as_str());

    let rewards = staking::fetch_rewards(&state.navi, user_address, pool_id).await;

    logger::debug(
        LogTag::Webserver,
        &format!(
            "Returning rewards (first 2): {:?}",
            &rewards[..rewards.len().min(2)]
        ),
    );

    success_response(rewards)
}
