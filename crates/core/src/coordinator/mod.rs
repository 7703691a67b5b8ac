//! Query input coordinator.
//!
//! This module owns the state behind a search field:
//! - the query text, initialized from the listing route's `q` parameter
//! - the suggestion panel visibility state machine
//! - the deferred hide after losing focus
//! - latest-request-wins acceptance of suggestion results
//! - dispatch of finalized queries through a [`Finalizer`]
//!
//! All transitions are synchronous. Timers and suggestion lookups are
//! driven by the host, which reports back through [`QueryCoordinator::on_blur_elapsed`]
//! and [`QueryCoordinator::on_suggestions`].

pub mod deferred;
pub mod finalize;
pub mod suggestions;
pub mod visibility;

pub use deferred::DeferredTask;
pub use finalize::{Finalizer, Navigator, SubmitHandler};
pub use suggestions::{SuggestionGate, SuggestionRequest};
pub use visibility::Visibility;

use tracing::debug;

/// Options read once when the coordinator is created.
#[derive(Debug, Clone, Default)]
pub struct CoordinatorOptions {
    /// Initial query, usually the `q` parameter of the current route.
    pub initial_query: Option<String>,
    /// Request input focus once at mount.
    pub auto_focus: bool,
}

/// Token for a pending blur hide, returned by [`QueryCoordinator::on_blur`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

/// State of one search field instance.
#[derive(Debug)]
pub struct QueryCoordinator {
    query: String,
    visibility: Visibility,
    finalizer: Finalizer,
    focus_requested: bool,
    hide_counter: u64,
    pending_hide: Option<HideTicket>,
    suggestions: SuggestionGate,
}

impl QueryCoordinator {
    /// Mount a coordinator.
    ///
    /// The panel starts hidden even when an initial query is present; only a
    /// focus or change event can show it.
    pub fn new(options: CoordinatorOptions, finalizer: Finalizer) -> Self {
        Self {
            query: options.initial_query.unwrap_or_default(),
            visibility: Visibility::Hidden,
            finalizer,
            focus_requested: options.auto_focus,
            hide_counter: 0,
            pending_hide: None,
            suggestions: SuggestionGate::new(),
        }
    }

    /// Current query text, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_panel_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Take the mount-time focus request. Returns `true` at most once.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Whether a blur hide is waiting for its delay to elapse.
    pub fn has_pending_hide(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// The text changed. No lookup is made here; see [`suggestion_request`](Self::suggestion_request).
    pub fn on_text_change(&mut self, value: impl Into<String>) {
        self.query = value.into();
        self.pending_hide = None;
        self.visibility = Visibility::for_text(&self.query);
    }

    /// The field gained focus. Shows the panel only when there is text.
    pub fn on_focus(&mut self) {
        self.pending_hide = None;
        if !self.query.is_empty() {
            self.visibility = Visibility::Visible;
        }
    }

    /// The field lost focus.
    ///
    /// The panel is not hidden yet: the host waits for the blur delay and then
    /// calls [`on_blur_elapsed`](Self::on_blur_elapsed) with the returned ticket,
    /// so a suggestion click landing in between still registers.
    pub fn on_blur(&mut self) -> HideTicket {
        self.hide_counter += 1;
        let ticket = HideTicket(self.hide_counter);
        self.pending_hide = Some(ticket);
        ticket
    }

    /// The blur delay for `ticket` elapsed.
    ///
    /// Hides the panel only if the ticket is still pending, i.e. no focus,
    /// text change, submit, clear or selection happened since the blur.
    /// Returns whether the panel was hidden.
    pub fn on_blur_elapsed(&mut self, ticket: HideTicket) -> bool {
        if self.pending_hide != Some(ticket) {
            debug!(?ticket, "ignoring cancelled blur hide");
            return false;
        }
        self.pending_hide = None;
        self.visibility = Visibility::Hidden;
        true
    }

    /// Submit the current text.
    ///
    /// Whitespace-only text is a no-op. Returns whether anything was dispatched.
    pub fn on_submit(&mut self) -> bool {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return false;
        }

        self.hide();
        debug!(%query, "submitting query");
        self.finalizer.finalize(&query);
        true
    }

    /// Clear the text and dispatch an empty query so filtered views reset.
    pub fn on_clear(&mut self) {
        self.query.clear();
        self.hide();
        self.suggestions.clear();
        debug!("clearing query");
        self.finalizer.finalize("");
    }

    /// A suggestion was picked: equivalent to typing it and submitting.
    pub fn on_suggestion_selected(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.hide();
        debug!(query = %self.query, "suggestion selected");
        self.finalizer.finalize(&self.query);
    }

    /// Issue a suggestion lookup for the current text.
    ///
    /// Returns `None` when the text is empty.
    pub fn suggestion_request(&mut self) -> Option<SuggestionRequest> {
        if self.query.is_empty() {
            return None;
        }
        Some(self.suggestions.issue(&self.query))
    }

    /// Deliver suggestion results.
    ///
    /// Results are kept only if they answer the latest request, for the
    /// current text, while the panel is visible. Returns whether they were kept.
    pub fn on_suggestions(&mut self, seq: u64, keyword: &str, items: Vec<String>) -> bool {
        if !self.visibility.is_visible() || !self.suggestions.is_current(seq, keyword, &self.query) {
            debug!(seq, keyword, latest = self.suggestions.latest_seq(), "dropping stale suggestions");
            return false;
        }
        self.suggestions.store(keyword, items);
        true
    }

    /// Suggestions to render: empty unless the panel is visible and they
    /// match the current text.
    pub fn visible_suggestions(&self) -> &[String] {
        if self.visibility.is_visible() {
            self.suggestions.items_for(&self.query)
        } else {
            &[]
        }
    }

    fn hide(&mut self) {
        self.pending_hide = None;
        self.visibility = Visibility::Hidden;
    }
}
