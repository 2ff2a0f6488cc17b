//! 应用层

pub mod catalog;

use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::HttpConfig;
use catalog::handler::{self, AppState};

/// 组装全部路由
pub fn router(state: AppState, config: &HttpConfig) -> Router {
    Router::new()
        .route("/", get(handler::list_page))
        .route("/add", get(handler::add_page).post(handler::submit_add))
        .route("/edit/:id", get(handler::edit_page).post(handler::submit_edit))
        .route("/delete/:id", post(handler::delete_product))
        .route("/events", get(handler::store_events))
        .fallback(handler::not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeout_seconds)))
        .with_state(state)
}
