use serde::{Deserialize, Serialize};

/// Review-site metadata attached to a candidate after a successful scrape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMetadata {
    pub rt_link: String,
    pub poster_url: String,
    pub tomato_score: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMovie {
    pub title: String,
    pub description: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rt_data: Option<ReviewMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub results: Vec<CandidateMovie>,
    pub query_understood: bool,
    pub total_results: usize,
    pub bad_query: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// Body of `POST /more`.
#[derive(Debug, Clone, Deserialize)]
pub struct MoreRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub previous_titles: Vec<String>,
}
