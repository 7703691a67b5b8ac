//! Inter-process communication protocol.
//!
//! This module defines the message types for asynchronous communication
//! between the TUI (user interface) and the Core (search logic).
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: Requests sent from TUI to Core
//! - `Event`: Results sent from Core to TUI
//!
//! Suggestion lookups run concurrently in the core, so `Event::Suggestions`
//! may arrive in a different order than the matching `Op::FetchSuggestions`
//! were sent. Each carries the `seq` and `keyword` of its request so the UI
//! can drop stale results.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog_models::{SearchFilters, SearchResponse};

/// Operations sent from the UI (TUI) to the Core logic.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "fetchSuggestions",
///   "payload": { "seq": 3, "keyword": "run" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Look up autocomplete suggestions for a partial query.
    FetchSuggestions {
        /// Request sequence number, echoed back in the event.
        seq: u64,
        /// The query text at request time.
        keyword: String,
    },

    /// Fetch a page of products matching a query.
    SearchProducts {
        query: String,
        page: u32,
        limit: u32,
        #[serde(default)]
        filters: SearchFilters,
    },

    /// Shut down the core loop.
    Shutdown,
}

/// Events sent from the Core logic to the UI (TUI).
///
/// ```json
/// {
///   "type": "suggestions",
///   "payload": { "seq": 3, "keyword": "run", "items": ["running shoes"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// Suggestions for an earlier `Op::FetchSuggestions`.
    ///
    /// A failed lookup is reported with empty `items`.
    Suggestions {
        seq: u64,
        keyword: String,
        items: Vec<String>,
    },

    /// A page of search results.
    SearchResults(SearchResponse),
}
