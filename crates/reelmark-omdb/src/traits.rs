use async_trait::async_trait;
use reelmark_types::{MovieDetail, MovieId, MovieSummary};
use std::fmt;

use crate::Result;

/// Movie metadata lookups
///
/// Responsibilities:
/// - Search titles by free text
/// - Resolve one id to its full record
///
/// Callers reject empty search terms before calling `search`.
#[async_trait]
pub trait MetadataApi: Send + Sync {
    /// Search by free-text term.
    async fn search(&self, term: &str) -> std::result::Result<Vec<MovieSummary>, SearchError>;

    /// Fetch the full record for `id`.
    ///
    /// An upstream "no such id" answer is `Ok` with `is_successful = false`;
    /// `Err` is reserved for transport and decoding failures.
    async fn fetch_detail(&self, id: &MovieId) -> Result<MovieDetail>;
}

/// Why a search produced no grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Upstream answered but matched nothing; carries its message when it sent one
    NotFound(Option<String>),

    /// Transport failure, non-success status or malformed body
    Network(String),
}

impl SearchError {
    pub const NOT_FOUND_FALLBACK: &'static str = "No films found";
    pub const NETWORK_MESSAGE: &'static str = "An error occurred while searching for films";

    /// Text shown to the user in place of the grid.
    pub fn user_message(&self) -> &str {
        match self {
            SearchError::NotFound(Some(message)) => message,
            SearchError::NotFound(None) => Self::NOT_FOUND_FALLBACK,
            SearchError::Network(_) => Self::NETWORK_MESSAGE,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NotFound(Some(message)) => write!(f, "Not found: {}", message),
            SearchError::NotFound(None) => write!(f, "Not found"),
            SearchError::Network(cause) => write!(f, "Network error: {}", cause),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<crate::Error> for SearchError {
    fn from(err: crate::Error) -> Self {
        SearchError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_upstream_text() {
        let err = SearchError::NotFound(Some("Movie not found!".to_string()));
        assert_eq!(err.user_message(), "Movie not found!");
        assert_eq!(SearchError::NotFound(None).user_message(), "No films found");
    }

    #[test]
    fn test_network_message_hides_cause() {
        let err = SearchError::Network("connection reset".to_string());
        assert_eq!(
            err.user_message(),
            "An error occurred while searching for films"
        );
        assert!(err.to_string().contains("connection reset"));
    }
}
