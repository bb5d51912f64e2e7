use crate::webserver::{state::AppState, utils::error_response};
use axum::{http::StatusCode, response::Response, Router};
use std::sync::Arc;

pub mod predict;
pub mod rewards;
pub mod status;
pub mod volo;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(volo::routes())
        .merge(rewards::routes())
        .merge(predict::routes())
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "not_found", "Not found")
}
