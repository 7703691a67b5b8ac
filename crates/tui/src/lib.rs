//! # sf-tui
//!
//! Terminal User Interface for storefront-search.
//!
//! This crate provides the interactive product listing with its search field
//! and suggestion panel. It communicates with `sf-core` via channels using
//! the `Op` and `Event` protocol defined in `sf-protocol`.

pub mod app;
pub mod event;
pub mod event_handler;
pub mod tui;
pub mod widgets;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use sf_core::config::loader::load_config;
use sf_core::config::models::AppConfig;
use sf_core::service::SearchService;
use sf_core::suggest::CatalogSuggestionSource;
use sf_protocol::{ListingRoute, Op, SearchSettings};
use tokio::sync::mpsc::unbounded_channel;

pub use app::App;
pub use tui::Tui;

/// How to start the TUI.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Project root containing `.storefront/`.
    pub root: PathBuf,
    /// Initial listing href such as `/admin/products?q=ball&page=2`.
    pub route: Option<String>,
    /// Query overriding the one in `route`.
    pub query: Option<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            route: None,
            query: None,
        }
    }
}

impl AppOptions {
    /// The listing route to open, falling back to the configured listing path.
    pub fn initial_route(&self, settings: &SearchSettings) -> ListingRoute {
        let route = match &self.route {
            Some(href) => ListingRoute::parse(href),
            None => ListingRoute::new(&settings.listing_path),
        };
        match &self.query {
            Some(query) => route.with_query(query).with_page(1),
            None => route,
        }
    }
}

/// Load the project at `options.root` and run the TUI until the user quits.
pub async fn run_app(options: AppOptions) -> Result<()> {
    let config = load_config(&options.root).await?;
    let route = options.initial_route(&config.settings.search);
    run_with_config(config, route).await
}

/// Run the TUI against an already loaded configuration.
pub async fn run_with_config(config: AppConfig, route: ListingRoute) -> Result<()> {
    let settings = config.settings.search;
    let catalog = Arc::new(config.catalog);
    let source = Arc::new(CatalogSuggestionSource::new(&catalog));

    let (op_tx, op_rx) = unbounded_channel();
    let (event_tx, event_rx) = unbounded_channel();

    let service = SearchService::new(
        catalog,
        source,
        settings.max_suggestions as usize,
        event_tx,
    );
    let service_handle = tokio::spawn(service.run(op_rx));

    let mut tui = Tui::init()?;
    let mut app = App::new(route, settings, op_tx.clone(), event_rx);
    let result = app.run(&mut tui).await;
    tui.restore()?;

    let _ = op_tx.send(Op::Shutdown);
    drop(app);
    drop(op_tx);
    service_handle.await??;

    result
}
