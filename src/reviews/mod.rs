pub mod parse;
pub mod rotten;

use async_trait::async_trait;

use crate::search::ReviewMetadata;

pub use parse::parse_search_page;
pub use rotten::RottenTomatoes;

/// Best-effort metadata lookup by movie title. Implementations never fail;
/// any problem is reported as "no metadata".
#[async_trait]
pub trait ReviewSource: Send + Sync {
    async fn lookup(&self, title: &str) -> Option<ReviewMetadata>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Search page returned status {0}")]
    Status(u16),
    #[error("Configured user agent is not a valid header value")]
    InvalidUserAgent,
}
