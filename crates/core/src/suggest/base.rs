//! Base SuggestionSource trait and error type.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    #[error("Suggestion source not available: {0}")]
    NotAvailable(String),
    #[error("Suggestion lookup failed: {0}")]
    LookupFailed(String),
}

/// Maps a partial query to candidate completions.
///
/// Implementations may be called repeatedly with overlapping in-flight
/// requests; they do not need to order their responses.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Return at most `limit` suggestions for `keyword`, best first.
    async fn suggest(&self, keyword: &str, limit: usize) -> Result<Vec<String>, SuggestError>;
}
