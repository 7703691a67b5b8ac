//! Search service answering UI operations.
//!
//! The service is the core side of the Op/Event protocol. It owns the
//! catalog and a suggestion source, receives `Op`s from the UI and sends
//! back `Event`s. Suggestion lookups are spawned as independent tasks, so
//! several may be in flight and complete in any order; the UI discards
//! stale ones by sequence number.

use anyhow::Result;
use sf_protocol::ipc::{Event, Op};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, SearchRequest};
use crate::suggest::SuggestionSource;

pub struct SearchService {
    catalog: Arc<Catalog>,
    source: Arc<dyn SuggestionSource>,
    max_suggestions: usize,
    events_tx: UnboundedSender<Event>,
}

impl SearchService {
    /// Create a new SearchService.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Products served by `Op::SearchProducts`
    /// * `source` - Suggestion source for `Op::FetchSuggestions`
    /// * `max_suggestions` - Upper bound on suggestions per lookup
    /// * `events_tx` - Channel for sending events to the UI
    pub fn new(
        catalog: Arc<Catalog>,
        source: Arc<dyn SuggestionSource>,
        max_suggestions: usize,
        events_tx: UnboundedSender<Event>,
    ) -> Self {
        Self {
            catalog,
            source,
            max_suggestions,
            events_tx,
        }
    }

    /// Process operations until `Op::Shutdown` or until the channel closes.
    pub async fn run(self, mut op_rx: UnboundedReceiver<Op>) -> Result<()> {
        info!(products = self.catalog.len(), "search service started");

        while let Some(op) = op_rx.recv().await {
            if !self.handle_op(op) {
                break;
            }
        }

        info!("search service stopped");
        Ok(())
    }

    /// Handle one operation. Returns `false` when the service should stop.
    pub fn handle_op(&self, op: Op) -> bool {
        match op {
            Op::FetchSuggestions { seq, keyword } => {
                self.spawn_suggestion_lookup(seq, keyword);
            }
            Op::SearchProducts {
                query,
                page,
                limit,
                filters,
            } => {
                let request = SearchRequest::new(query)
                    .page(page)
                    .limit(limit)
                    .filters(filters);
                let response = self.catalog.search(&request);
                debug!(
                    query = %request.query,
                    page = response.data.pagination.current_page,
                    total = response.data.pagination.total_products,
                    "search completed"
                );
                let _ = self.events_tx.send(Event::SearchResults(response));
            }
            Op::Shutdown => return false,
        }
        true
    }

    fn spawn_suggestion_lookup(&self, seq: u64, keyword: String) {
        let source = Arc::clone(&self.source);
        let events_tx = self.events_tx.clone();
        let limit = self.max_suggestions;

        tokio::spawn(async move {
            let items = match source.suggest(&keyword, limit).await {
                Ok(items) => items,
                Err(e) => {
                    warn!(seq, %keyword, error = %e, "suggestion lookup failed");
                    Vec::new()
                }
            };
            let _ = events_tx.send(Event::Suggestions {
                seq,
                keyword,
                items,
            });
        });
    }
}
