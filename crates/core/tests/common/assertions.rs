//! Custom assertion helpers for integration tests.

use sf_protocol::ipc::Event;

/// Extract the items of a Suggestions event.
pub fn suggestion_items(event: &Event) -> Option<&[String]> {
    match event {
        Event::Suggestions { items, .. } => Some(items),
        _ => None,
    }
}

/// Extract the product names of a SearchResults event.
pub fn result_names(event: &Event) -> Option<Vec<&str>> {
    match event {
        Event::SearchResults(response) => Some(
            response
                .data
                .products
                .iter()
                .map(|p| p.name.as_str())
                .collect(),
        ),
        _ => None,
    }
}

/// Assert that a string contains a substring (case-insensitive).
pub fn assert_contains_ci(haystack: &str, needle: &str) {
    let haystack_lower = haystack.to_lowercase();
    let needle_lower = needle.to_lowercase();
    assert!(
        haystack_lower.contains(&needle_lower),
        "Expected '{}' to contain '{}' (case-insensitive)",
        haystack,
        needle
    );
}
