//! Mock suggestion sources for deterministic testing.

use async_trait::async_trait;
use sf_core::suggest::{SuggestError, SuggestionSource};
use std::collections::HashMap;
use std::time::Duration;

/// Answers `"<keyword> 1"`, `"<keyword> 2"`, ... after a per-keyword delay.
///
/// Longer delays for shorter keywords reproduce out-of-order delivery when
/// the user types quickly.
#[allow(dead_code)]
pub struct DelayedSource {
    pub delays: HashMap<String, Duration>,
}

impl DelayedSource {
    #[allow(dead_code)]
    pub fn new(delays: &[(&str, u64)]) -> Self {
        Self {
            delays: delays
                .iter()
                .map(|(k, ms)| (k.to_string(), Duration::from_millis(*ms)))
                .collect(),
        }
    }
}

#[async_trait]
impl SuggestionSource for DelayedSource {
    async fn suggest(&self, keyword: &str, limit: usize) -> Result<Vec<String>, SuggestError> {
        if let Some(delay) = self.delays.get(keyword) {
            tokio::time::sleep(*delay).await;
        }
        Ok((1..=limit).map(|i| format!("{keyword} {i}")).collect())
    }
}

/// A source that always fails.
#[allow(dead_code)]
pub struct FailingSource;

#[async_trait]
impl SuggestionSource for FailingSource {
    async fn suggest(&self, keyword: &str, _limit: usize) -> Result<Vec<String>, SuggestError> {
        Err(SuggestError::LookupFailed(format!("backend down for {keyword}")))
    }
}
