//! TUI application state and event loop.
//!
//! This module defines the main `App` struct that manages the listing screen
//! and the event loop using `tokio::select!`. Timers for the blur grace
//! period and the suggestion debounce report back through an internal
//! message channel so all state changes happen on the loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sf_core::coordinator::{
    CoordinatorOptions, DeferredTask, Finalizer, HideTicket, QueryCoordinator,
};
use sf_protocol::{Event, ListingRoute, Op, Pagination, Product, SearchSettings};
use tokio::select;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_stream::StreamExt;

use crate::event_handler::{self, ListAction};
use crate::tui::{Tui, TuiEvent};
use crate::widgets::product_list::{pagination_line, render_product_list};
use crate::widgets::SearchField;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
}

/// Messages the app sends to itself from callbacks and timers.
#[derive(Debug)]
pub enum AppMessage {
    /// A query was submitted, selected or cleared.
    Search(String),
    /// The blur grace period for this ticket ran out.
    HideElapsed(HideTicket),
    /// Typing paused long enough to look up suggestions.
    DebounceElapsed,
}

/// Main TUI application state.
pub struct App {
    /// Listing route currently shown.
    pub route: ListingRoute,
    pub settings: SearchSettings,
    pub search_field: SearchField,
    pub focus: Focus,
    /// Products on the current page.
    pub products: Vec<Product>,
    pub pagination: Pagination,
    /// Index of the selected product.
    pub selected_index: usize,
    /// A search request is in flight.
    pub loading: bool,
    /// Channel to send operations to the core.
    pub op_tx: UnboundedSender<Op>,
    /// Channel to receive events from the core.
    pub event_rx: UnboundedReceiver<Event>,
    msg_tx: UnboundedSender<AppMessage>,
    msg_rx: UnboundedReceiver<AppMessage>,
    blur_task: DeferredTask,
    debounce_task: DeferredTask,
    /// Flag to indicate if the application should exit.
    pub should_exit: bool,
}

impl App {
    /// Create a new App showing `route`.
    ///
    /// The search field starts with the route's query and takes focus when
    /// that query is present.
    pub fn new(
        route: ListingRoute,
        settings: SearchSettings,
        op_tx: UnboundedSender<Op>,
        event_rx: UnboundedReceiver<Event>,
    ) -> Self {
        let (msg_tx, msg_rx) = unbounded_channel();

        let search_tx = msg_tx.clone();
        let finalizer = Finalizer::handler(move |query: &str| {
            let _ = search_tx.send(AppMessage::Search(query.to_string()));
        });
        let mut coordinator = QueryCoordinator::new(
            CoordinatorOptions {
                initial_query: route.query.clone(),
                auto_focus: route.query.is_some(),
            },
            finalizer,
        );
        let autofocus = coordinator.take_focus_request();

        let mut search_field = SearchField::new(coordinator, "Search products...");
        let focus = if autofocus {
            search_field.focus();
            Focus::Search
        } else {
            Focus::Results
        };

        Self {
            route,
            settings,
            search_field,
            focus,
            products: Vec::new(),
            pagination: Pagination::default(),
            selected_index: 0,
            loading: false,
            op_tx,
            event_rx,
            msg_tx,
            msg_rx,
            blur_task: DeferredTask::new(),
            debounce_task: DeferredTask::new(),
            should_exit: false,
        }
    }

    /// Request the first page and, when the panel is already open, its
    /// suggestions. Must run inside the tokio runtime.
    pub fn start(&mut self) {
        self.request_products();
        if self.search_field.coordinator().is_panel_visible() {
            self.schedule_suggestions();
        }
    }

    /// Main event loop.
    ///
    /// Uses `tokio::select!` to handle terminal input, core events and the
    /// app's own timer messages concurrently.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();

        self.start();
        tui.frame_requester().schedule_frame();

        while !self.should_exit {
            select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_core_event(event);
                    tui.frame_requester().schedule_frame();
                }
                Some(message) = self.msg_rx.recv() => {
                    self.handle_message(message);
                    tui.frame_requester().schedule_frame();
                }
                Some(tui_event) = tui_events.next() => {
                    self.handle_tui_event(tui, tui_event)?;
                }
            }
        }

        Ok(())
    }

    /// Handle events from the core (sf-core).
    fn handle_core_event(&mut self, event: Event) {
        match event {
            Event::Suggestions {
                seq,
                keyword,
                items,
            } => {
                self.search_field.on_suggestions(seq, &keyword, items);
            }
            Event::SearchResults(response) => {
                self.loading = false;
                event_handler::apply_search_results(
                    &mut self.products,
                    &mut self.pagination,
                    &mut self.selected_index,
                    response,
                );
            }
        }
    }

    fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Search(query) => {
                tracing::debug!(%query, "navigating to search results");
                self.route = self.route.clone().with_query(&query).with_page(1);
                self.selected_index = 0;
                self.request_products();
            }
            AppMessage::HideElapsed(ticket) => {
                self.search_field.coordinator_mut().on_blur_elapsed(ticket);
            }
            AppMessage::DebounceElapsed => self.fetch_suggestions(),
        }
    }

    /// Handle TUI events (keyboard input, paste, focus, draw).
    fn handle_tui_event(&mut self, tui: &mut Tui, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key_event) => {
                self.handle_key_event(key_event);
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::Paste(text) => {
                self.handle_paste(&text);
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::FocusGained => {
                if self.focus == Focus::Search && !self.search_field.is_focused() {
                    self.focus_search();
                }
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::FocusLost => {
                if self.focus == Focus::Search && self.search_field.is_focused() {
                    self.blur_search();
                }
            }
            TuiEvent::Draw => {
                tui.draw(|frame| {
                    self.render(frame);
                })?;
            }
        }
        Ok(())
    }

    /// Handle keyboard events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_exit = true;
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key_event),
            Focus::Results => {
                let action = event_handler::handle_list_key(
                    key_event,
                    &mut self.selected_index,
                    self.products.len(),
                );
                match action {
                    ListAction::None => {}
                    ListAction::Quit => self.should_exit = true,
                    ListAction::FocusSearch => self.focus_search(),
                    ListAction::PrevPage => self.change_page(false),
                    ListAction::NextPage => self.change_page(true),
                }
            }
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        if matches!(key_event.code, KeyCode::Tab | KeyCode::BackTab) {
            self.focus_results();
            return;
        }
        let before = self.search_field.query().to_string();
        if self.search_field.handle_key_event(key_event).is_consumed() {
            self.after_edit(&before);
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.focus != Focus::Search {
            return;
        }
        let before = self.search_field.query().to_string();
        self.search_field.insert_str(text);
        self.after_edit(&before);
    }

    /// Debounce a suggestion lookup when the text changed and the panel is open.
    fn after_edit(&mut self, before: &str) {
        if !self.search_field.coordinator().is_panel_visible() {
            self.debounce_task.cancel();
        } else if self.search_field.query() != before {
            self.schedule_suggestions();
        }
    }

    fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.blur_task.cancel();
        self.search_field.focus();
        if self.search_field.coordinator().is_panel_visible() {
            self.schedule_suggestions();
        }
    }

    fn focus_results(&mut self) {
        self.focus = Focus::Results;
        self.blur_search();
    }

    /// Blur the field and hide its panel once the grace period passes.
    fn blur_search(&mut self) {
        let ticket = self.search_field.blur();
        self.debounce_task.cancel();
        let tx = self.msg_tx.clone();
        self.blur_task.schedule(
            Duration::from_millis(self.settings.blur_delay_ms),
            move || {
                let _ = tx.send(AppMessage::HideElapsed(ticket));
            },
        );
    }

    fn schedule_suggestions(&mut self) {
        let tx = self.msg_tx.clone();
        self.debounce_task.schedule(
            Duration::from_millis(self.settings.debounce_ms),
            move || {
                let _ = tx.send(AppMessage::DebounceElapsed);
            },
        );
    }

    fn fetch_suggestions(&mut self) {
        if !self.search_field.coordinator().is_panel_visible() {
            return;
        }
        let Some(request) = self.search_field.coordinator_mut().suggestion_request() else {
            return;
        };
        tracing::trace!(seq = request.seq, keyword = %request.keyword, "requesting suggestions");
        let op = Op::FetchSuggestions {
            seq: request.seq,
            keyword: request.keyword,
        };
        if self.op_tx.send(op).is_err() {
            tracing::warn!("core channel closed; suggestions unavailable");
        }
    }

    fn request_products(&mut self) {
        self.loading = true;
        let op = event_handler::search_op(&self.route, self.settings.page_size);
        if self.op_tx.send(op).is_err() {
            tracing::warn!(route = %self.route, "core channel closed; cannot search");
            self.loading = false;
        }
    }

    fn change_page(&mut self, forward: bool) {
        let page = if forward {
            if !self.pagination.has_next_page {
                return;
            }
            self.route.page + 1
        } else {
            if !self.pagination.has_prev_page {
                return;
            }
            self.route.page.saturating_sub(1)
        };
        self.route = self.route.clone().with_page(page);
        self.selected_index = 0;
        self.request_products();
    }

    /// Header text describing the current results.
    pub fn summary(&self) -> String {
        if self.loading && self.products.is_empty() {
            return "Loading products...".to_string();
        }
        let total = self.pagination.total_products;
        let noun = if total == 1 { "product" } else { "products" };
        match &self.route.query {
            Some(query) => format!("{total} {noun} found for \"{query}\""),
            None => format!("{total} {noun} found"),
        }
    }

    /// Render the TUI.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Search field
                Constraint::Min(3),    // Product table
                Constraint::Length(1), // Pagination
            ])
            .split(area);

        let header = Line::from(vec![
            Span::styled(
                "Products  ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.summary(), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        self.search_field.render(chunks[1], frame.buffer_mut());
        if self.focus == Focus::Search && self.search_field.is_focused() {
            frame.set_cursor_position(self.search_field.cursor_position(chunks[1]));
        }

        render_product_list(
            frame,
            chunks[2],
            &self.products,
            self.selected_index,
            self.focus == Focus::Results,
        );
        frame.render_widget(Paragraph::new(pagination_line(&self.pagination)), chunks[3]);

        // Drawn last so it overlays the table.
        if self.search_field.should_show_popup() {
            let popup = self.search_field.popup_area(chunks[1], area);
            self.search_field.render_popup(popup, frame.buffer_mut());
        }
    }
}
