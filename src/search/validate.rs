use serde::Deserialize;
use tracing::warn;

use super::types::{CandidateMovie, SearchResult};

#[derive(Debug, Deserialize)]
struct RawCompletion {
    results: Vec<RawCandidate>,
    query_understood: bool,
    #[serde(default)]
    total_results: Option<f64>,
    #[serde(default)]
    bad_query: bool,
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    title: String,
    description: String,
    confidence: f64,
}

/// Parse an LLM completion into a `SearchResult`.
///
/// `bad_query` defaults to false and `total_results` is always rewritten to
/// the number of results actually returned.
pub fn parse_completion(text: &str) -> Result<SearchResult, ValidationError> {
    let raw: RawCompletion = serde_json::from_str(strip_code_fence(text))?;

    let mut results = Vec::with_capacity(raw.results.len());
    for (index, candidate) in raw.results.into_iter().enumerate() {
        let title = candidate.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle(index));
        }
        if !(0.0..=1.0).contains(&candidate.confidence) {
            return Err(ValidationError::Confidence {
                title: title.to_string(),
                value: candidate.confidence,
            });
        }
        results.push(CandidateMovie {
            title: title.to_string(),
            description: candidate.description,
            confidence: candidate.confidence,
            rt_data: None,
        });
    }

    if let Some(reported) = raw.total_results {
        if reported != results.len() as f64 {
            warn!(
                reported = reported,
                actual = results.len(),
                "LLM total_results does not match result count"
            );
        }
    }

    Ok(SearchResult {
        total_results: results.len(),
        results,
        query_understood: raw.query_understood,
        bad_query: raw.bad_query,
    })
}

// Some models wrap JSON output in a markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Completion is not valid JSON for the result schema: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Result {0} has an empty title")]
    EmptyTitle(usize),
    #[error("Confidence {value} for {title:?} is outside [0, 1]")]
    Confidence { title: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_completion() {
        let text = r#"{
            "results": [
                {"title": "The Matrix", "description": "Reality is a simulation.", "confidence": 0.95},
                {"title": "Inception", "description": "Dreams within dreams.", "confidence": 1}
            ],
            "query_understood": true,
            "total_results": 2,
            "bad_query": false
        }"#;

        let result = parse_completion(text).unwrap();
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.total_results, 2);
        assert_eq!(result.results[0].title, "The Matrix");
        assert_eq!(result.results[1].confidence, 1.0);
        assert!(result.query_understood);
        assert!(!result.bad_query);
        assert!(result.results.iter().all(|r| r.rt_data.is_none()));
    }

    #[test]
    fn test_total_results_reconciled() {
        let text = r#"{
            "results": [{"title": "Heat", "description": "Cops and robbers.", "confidence": 0.7}],
            "query_understood": true,
            "total_results": 5
        }"#;

        let result = parse_completion(text).unwrap();
        assert_eq!(result.total_results, 1);
        assert!(!result.bad_query);
    }

    #[test]
    fn test_bad_query_payload() {
        let text = r#"{"results": [], "query_understood": false, "total_results": 0, "bad_query": true}"#;
        let result = parse_completion(text).unwrap();
        assert!(result.bad_query);
        assert!(result.results.is_empty());
        assert_eq!(result.total_results, 0);
    }

    #[test]
    fn test_fenced_json() {
        let text = "```json\n{\"results\": [], \"query_understood\": true}\n```";
        let result = parse_completion(text).unwrap();
        assert!(result.query_understood);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_completion("Here are some movies: The Matrix"),
            Err(ValidationError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let text = r#"{"results": [{"title": "Alien", "confidence": 0.9}], "query_understood": true}"#;
        assert!(matches!(parse_completion(text), Err(ValidationError::Json(_))));

        let text = r#"{"results": []}"#;
        assert!(matches!(parse_completion(text), Err(ValidationError::Json(_))));
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let text = r#"{
            "results": [{"title": "Alien", "description": "In space.", "confidence": 1.5}],
            "query_understood": true
        }"#;
        match parse_completion(text) {
            Err(ValidationError::Confidence { title, value }) => {
                assert_eq!(title, "Alien");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let text = r#"{
            "results": [{"title": "Alien", "description": "In space.", "confidence": -0.1}],
            "query_understood": true
        }"#;
        assert!(matches!(
            parse_completion(text),
            Err(ValidationError::Confidence { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_title() {
        let text = r#"{
            "results": [{"title": "  ", "description": "Nothing.", "confidence": 0.5}],
            "query_understood": true
        }"#;
        assert!(matches!(
            parse_completion(text),
            Err(ValidationError::EmptyTitle(0))
        ));
    }
}
