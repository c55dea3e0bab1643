use axum::{
    extract::{Query, State},
    Json,
};

use super::error::ApiError;
use super::pipeline::run_search;
use super::types::*;
use crate::llm::more_results_message;
use crate::server::AppState;

fn required_query(query: Option<&str>) -> Result<&str, ApiError> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::NoQuery)
}

/// GET /search?query=...
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResult>, ApiError> {
    let query = required_query(params.query.as_deref())?;

    let result = run_search(state.oracle.as_ref(), state.reviews.as_ref(), query).await?;
    Ok(Json(result))
}

/// POST /more: further suggestions that exclude titles already shown.
pub async fn more(
    State(state): State<AppState>,
    Json(request): Json<MoreRequest>,
) -> Result<Json<SearchResult>, ApiError> {
    let query = required_query(Some(request.query.as_str()))?;
    let message = more_results_message(query, &request.previous_titles);

    let result = run_search(state.oracle.as_ref(), state.reviews.as_ref(), &message).await?;
    Ok(Json(result))
}
