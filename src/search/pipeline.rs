use tracing::{debug, info};

use super::error::ApiError;
use super::types::SearchResult;
use super::validate::parse_completion;
use crate::llm::{MovieOracle, SYSTEM_PROMPT};
use crate::reviews::ReviewSource;

/// Ask the LLM for candidates and validate its answer.
pub async fn recommend(oracle: &dyn MovieOracle, message: &str) -> Result<SearchResult, ApiError> {
    let completion = oracle.complete(SYSTEM_PROMPT, message).await?;
    let result = parse_completion(&completion)?;

    info!(
        results = result.total_results,
        query_understood = result.query_understood,
        bad_query = result.bad_query,
        "LLM recommendations parsed"
    );

    Ok(result)
}

/// Attach review metadata to every candidate, one lookup at a time, in order.
pub async fn enrich(reviews: &dyn ReviewSource, result: &mut SearchResult) {
    for candidate in result.results.iter_mut() {
        candidate.rt_data = reviews.lookup(&candidate.title).await;
        if candidate.rt_data.is_none() {
            debug!(title = %candidate.title, "No review metadata attached");
        }
    }
}

/// Full request pipeline. Non-movie queries are returned as the LLM
/// classified them, without enrichment.
pub async fn run_search(
    oracle: &dyn MovieOracle,
    reviews: &dyn ReviewSource,
    message: &str,
) -> Result<SearchResult, ApiError> {
    let mut result = recommend(oracle, message).await?;

    if result.bad_query {
        info!("Query classified as unrelated to movies");
        return Ok(result);
    }

    enrich(reviews, &mut result).await;
    Ok(result)
}
