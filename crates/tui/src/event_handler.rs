//! Event handling utilities for the TUI.
//!
//! This module provides functions for handling different types of events:
//! - Search results coming back from sf-core
//! - Keyboard events while the product list has focus
//! - Building the search request for the current route

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use sf_protocol::{ListingRoute, Op, Pagination, Product, SearchFilters, SearchResponse};

/// What the app should do after a key press on the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    None,
    Quit,
    FocusSearch,
    PrevPage,
    NextPage,
}

/// Replace the visible page with a search response.
pub fn apply_search_results(
    products: &mut Vec<Product>,
    pagination: &mut Pagination,
    selected_index: &mut usize,
    response: SearchResponse,
) {
    if !response.success {
        tracing::warn!(query = %response.data.query, "search reported failure");
    }
    *products = response.data.products;
    *pagination = response.data.pagination;
    *selected_index = (*selected_index).min(products.len().saturating_sub(1));
}

/// Handle a keyboard event while the product list has focus.
///
/// Selection moves are applied in place; everything else is returned as a
/// [`ListAction`] for the app to carry out.
pub fn handle_list_key(
    key_event: KeyEvent,
    selected_index: &mut usize,
    product_count: usize,
) -> ListAction {
    if key_event.kind != KeyEventKind::Press {
        return ListAction::None;
    }

    match key_event.code {
        KeyCode::Char('q') => ListAction::Quit,
        KeyCode::Tab | KeyCode::Char('/') => ListAction::FocusSearch,
        KeyCode::Up => {
            if *selected_index > 0 {
                *selected_index -= 1;
            }
            ListAction::None
        }
        KeyCode::Down => {
            if *selected_index < product_count.saturating_sub(1) {
                *selected_index += 1;
            }
            ListAction::None
        }
        KeyCode::Left | KeyCode::Char('[') => ListAction::PrevPage,
        KeyCode::Right | KeyCode::Char(']') => ListAction::NextPage,
        _ => ListAction::None,
    }
}

/// Build the search operation for a listing route.
pub fn search_op(route: &ListingRoute, page_size: u32) -> Op {
    Op::SearchProducts {
        query: route.query_str().to_string(),
        page: route.page,
        limit: page_size,
        filters: SearchFilters::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_protocol::{ProductId, SearchData};

    fn product(name: &str) -> Product {
        Product {
            id: ProductId::Text(name.to_lowercase()),
            name: name.to_string(),
            title: None,
            price: 10.0,
            original_price: None,
            sport: None,
            brand: None,
            category: None,
        }
    }

    fn response(names: &[&str], total: u32, page: u32) -> SearchResponse {
        SearchResponse {
            success: true,
            data: SearchData {
                products: names.iter().map(|n| product(n)).collect(),
                pagination: Pagination::compute(total, page, 2),
                query: String::new(),
                filters: SearchFilters::default(),
            },
        }
    }

    #[test]
    fn test_apply_search_results_replaces_page() {
        let mut products = vec![product("Old")];
        let mut pagination = Pagination::default();
        let mut selected = 0;

        apply_search_results(
            &mut products,
            &mut pagination,
            &mut selected,
            response(&["Ball", "Boots"], 5, 2),
        );

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Ball");
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.total_pages, 3);
    }

    #[test]
    fn test_apply_search_results_clamps_selection() {
        let mut products = vec![product("A"), product("B"), product("C")];
        let mut pagination = Pagination::default();
        let mut selected = 2;

        apply_search_results(&mut products, &mut pagination, &mut selected, response(&["A"], 1, 1));
        assert_eq!(selected, 0);

        apply_search_results(&mut products, &mut pagination, &mut selected, response(&[], 0, 1));
        assert_eq!(selected, 0);
        assert!(products.is_empty());
    }

    #[test]
    fn test_list_navigation_stays_in_bounds() {
        let mut selected = 0;

        assert_eq!(
            handle_list_key(KeyEvent::from(KeyCode::Up), &mut selected, 3),
            ListAction::None
        );
        assert_eq!(selected, 0);

        handle_list_key(KeyEvent::from(KeyCode::Down), &mut selected, 3);
        handle_list_key(KeyEvent::from(KeyCode::Down), &mut selected, 3);
        handle_list_key(KeyEvent::from(KeyCode::Down), &mut selected, 3);
        assert_eq!(selected, 2);

        handle_list_key(KeyEvent::from(KeyCode::Up), &mut selected, 3);
        assert_eq!(selected, 1);
    }

    #[test]
    fn test_list_actions() {
        let mut selected = 0;
        let mut action = |code: KeyCode| handle_list_key(KeyEvent::from(code), &mut selected, 0);

        assert_eq!(action(KeyCode::Char('q')), ListAction::Quit);
        assert_eq!(action(KeyCode::Tab), ListAction::FocusSearch);
        assert_eq!(action(KeyCode::Char('/')), ListAction::FocusSearch);
        assert_eq!(action(KeyCode::Left), ListAction::PrevPage);
        assert_eq!(action(KeyCode::Char(']')), ListAction::NextPage);
        assert_eq!(action(KeyCode::Char('x')), ListAction::None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut selected = 0;
        let mut key = KeyEvent::from(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_list_key(key, &mut selected, 1), ListAction::None);
    }

    #[test]
    fn test_search_op_uses_route() {
        let route = ListingRoute::new("/admin/products")
            .with_query("running shoes")
            .with_page(3);
        assert_eq!(
            search_op(&route, 12),
            Op::SearchProducts {
                query: "running shoes".to_string(),
                page: 3,
                limit: 12,
                filters: SearchFilters::default(),
            }
        );

        match search_op(&ListingRoute::new("/admin/products"), 12) {
            Op::SearchProducts { query, page, .. } => {
                assert_eq!(query, "");
                assert_eq!(page, 1);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }
}
