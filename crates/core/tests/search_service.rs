//! Integration tests for SearchService.
//!
//! These tests verify that the SearchService correctly:
//! - Answers product searches from a loaded configuration
//! - Runs suggestion lookups concurrently
//! - Reports failed lookups as empty suggestions

mod common;

use common::*;
use sf_core::catalog::Catalog;
use sf_core::config::loader::load_config;
use sf_core::service::SearchService;
use sf_core::suggest::CatalogSuggestionSource;
use sf_protocol::ipc::{Event, Op};
use sf_protocol::SearchFilters;
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;

#[tokio::test]
async fn test_service_over_loaded_project() {
    let project = create_test_project().expect("Failed to create test project");
    let config = load_config(project.path()).await.expect("Failed to load config");
    let search = config.settings.search.clone();

    let catalog = Arc::new(config.catalog);
    let source = Arc::new(CatalogSuggestionSource::new(&catalog));
    let (events_tx, mut events_rx) = unbounded_channel();
    let (op_tx, op_rx) = unbounded_channel();

    let service = SearchService::new(catalog, source, search.max_suggestions as usize, events_tx);
    let handle = tokio::spawn(service.run(op_rx));

    op_tx
        .send(Op::SearchProducts {
            query: "running".to_string(),
            page: 1,
            limit: search.page_size,
            filters: SearchFilters::default(),
        })
        .unwrap();

    let event = events_rx.recv().await.unwrap();
    let names = result_names(&event).expect("Expected SearchResults");
    assert_eq!(names, vec!["Ultraboost Light", "Running Shorts"]);
    if let Event::SearchResults(response) = &event {
        assert_eq!(response.data.pagination.limit, 2);
        assert!(!response.data.pagination.has_next_page);
    }

    op_tx
        .send(Op::FetchSuggestions {
            seq: 1,
            keyword: "ad".to_string(),
        })
        .unwrap();
    let event = events_rx.recv().await.unwrap();
    assert_eq!(suggestion_items(&event).unwrap(), ["adidas".to_string()]);

    op_tx.send(Op::Shutdown).unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_lookups_complete_out_of_order() {
    let (events_tx, mut events_rx) = unbounded_channel();
    let source = Arc::new(DelayedSource::new(&[("r", 300), ("ru", 100), ("run", 10)]));
    let service = SearchService::new(Arc::new(Catalog::default()), source, 1, events_tx);

    for (seq, keyword) in [(1, "r"), (2, "ru"), (3, "run")] {
        service.handle_op(Op::FetchSuggestions {
            seq,
            keyword: keyword.to_string(),
        });
    }

    let mut order = Vec::new();
    for _ in 0..3 {
        if let Some(Event::Suggestions { seq, .. }) = events_rx.recv().await {
            order.push(seq);
        }
    }
    assert_eq!(order, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_failed_lookup_yields_empty_suggestions() {
    let (events_tx, mut events_rx) = unbounded_channel();
    let service = SearchService::new(Arc::new(Catalog::default()), Arc::new(FailingSource), 5, events_tx);

    service.handle_op(Op::FetchSuggestions {
        seq: 4,
        keyword: "ball".to_string(),
    });

    assert_eq!(
        events_rx.recv().await.unwrap(),
        Event::Suggestions {
            seq: 4,
            keyword: "ball".to_string(),
            items: vec![],
        }
    );
}

#[tokio::test]
async fn test_filtered_search_through_service() {
    let (events_tx, mut events_rx) = unbounded_channel();
    let catalog = Arc::new(Catalog::new(sample_products()));
    let source = Arc::new(CatalogSuggestionSource::new(&catalog));
    let service = SearchService::new(catalog, source, 5, events_tx);

    service.handle_op(Op::SearchProducts {
        query: "ball".to_string(),
        page: 1,
        limit: 12,
        filters: SearchFilters {
            sport: Some("Rugby".to_string()),
            ..SearchFilters::default()
        },
    });

    let event = events_rx.recv().await.unwrap();
    assert_eq!(result_names(&event).unwrap(), vec!["Rugby Ball"]);
}
