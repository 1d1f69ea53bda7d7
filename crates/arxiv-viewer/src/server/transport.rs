//! HTTP routes.
//!
//! - `GET /papers/latest` and `GET /papers/search` return JSON arrays of papers
//! - `GET /health` reports liveness
//! - `GET /` and `/static/*` serve the frontend
//!
//! Validation failures become 400s. Source errors and handler panics become
//! 500s with a generic message; the cause is only logged.

use std::any::Any;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::config::paging;
use crate::error::{ApiError, ApiResult};
use crate::models::Paper;

pub const EMPTY_KEYWORD: &str = "Keyword cannot be empty or just whitespace.";
pub const ZERO_MAX_RESULTS: &str = "max_results must be greater than zero.";
pub const LATEST_FAILED: &str = "An unexpected error occurred while fetching latest papers.";
pub const SEARCH_FAILED: &str = "An unexpected error occurred while searching papers.";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Query parameters for `/papers/latest`.
#[derive(Debug, Deserialize)]
pub struct LatestParams {
    #[serde(default)]
    pub start: u32,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// Query parameters for `/papers/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
    #[serde(default)]
    pub start: u32,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

const fn default_max_results() -> u32 {
    paging::DEFAULT_MAX_RESULTS
}

/// Create the HTTP router.
pub fn create_router(state: AppState) -> Router {
    let index = ServeFile::new(state.static_dir.join("index.html"));
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/health", get(health_check))
        .route("/papers/latest", get(latest_papers))
        .route("/papers/search", get(search_papers))
        .route_service("/", index)
        .nest_service("/static", assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "arxiv-viewer",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn latest_papers(
    State(state): State<AppState>,
    params: Result<Query<LatestParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Paper>>> {
    let Query(params) = params.map_err(reject_query)?;
    check_max_results(params.max_results)?;

    match state.source.latest(params.start, params.max_results).await {
        Ok(papers) => Ok(Json(papers)),
        Err(e) => {
            tracing::error!(error = %e, "Error in /papers/latest endpoint");
            Err(ApiError::internal(LATEST_FAILED))
        }
    }
}

async fn search_papers(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Paper>>> {
    let Query(params) = params.map_err(reject_query)?;

    if params.keyword.trim().is_empty() {
        tracing::warn!(keyword = %params.keyword, "Search attempt with empty keyword");
        return Err(ApiError::bad_request(EMPTY_KEYWORD));
    }
    check_max_results(params.max_results)?;

    match state.source.search(&params.keyword, params.start, params.max_results).await {
        Ok(papers) => Ok(Json(papers)),
        Err(e) => {
            tracing::error!(
                keyword = %params.keyword,
                error = %e,
                "Error in /papers/search endpoint"
            );
            Err(ApiError::internal(SEARCH_FAILED))
        }
    }
}

fn check_max_results(max_results: u32) -> ApiResult<()> {
    if max_results == 0 {
        return Err(ApiError::bad_request(ZERO_MAX_RESULTS));
    }
    Ok(())
}

fn reject_query(rejection: QueryRejection) -> ApiError {
    tracing::debug!(error = %rejection, "Rejected query string");
    ApiError::bad_request(rejection.body_text())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(panic = detail, "Request handler panicked");
    ApiError::internal(INTERNAL_ERROR).into_response()
}
