//! Latest-request-wins bookkeeping for asynchronous suggestion lookups.
//!
//! Lookups are issued as the text changes and may resolve in any order.
//! Each request gets a monotonic sequence number; only the result of the
//! most recent request, for the text it was issued with, is kept.

/// A suggestion lookup to be performed by a suggestion source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub seq: u64,
    pub keyword: String,
}

/// Tracks issued requests and the accepted result.
#[derive(Debug, Default)]
pub struct SuggestionGate {
    last_seq: u64,
    accepted_keyword: String,
    items: Vec<String>,
}

impl SuggestionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a request for `keyword`, superseding all earlier ones.
    pub fn issue(&mut self, keyword: &str) -> SuggestionRequest {
        self.last_seq += 1;
        SuggestionRequest {
            seq: self.last_seq,
            keyword: keyword.to_string(),
        }
    }

    /// Sequence number of the most recent request, 0 if none was issued.
    pub fn latest_seq(&self) -> u64 {
        self.last_seq
    }

    /// Whether a result for (`seq`, `keyword`) is current against `current_text`.
    pub fn is_current(&self, seq: u64, keyword: &str, current_text: &str) -> bool {
        seq != 0 && seq == self.last_seq && keyword == current_text
    }

    /// Store a result. Callers check [`is_current`](Self::is_current) first.
    pub fn store(&mut self, keyword: &str, items: Vec<String>) {
        self.accepted_keyword = keyword.to_string();
        self.items = items;
    }

    /// Accepted items, if they were produced for `current_text`.
    pub fn items_for(&self, current_text: &str) -> &[String] {
        if !current_text.is_empty() && self.accepted_keyword == current_text {
            &self.items
        } else {
            &[]
        }
    }

    pub fn clear(&mut self) {
        self.accepted_keyword.clear();
        self.items.clear();
    }
}
