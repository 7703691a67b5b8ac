//! Listing route with query parameters.
//!
//! The product listing is addressed by an href such as
//! `/admin/products?q=running%20shoes&page=2`. This module renders and
//! parses that form so the search field can be initialized from, and
//! navigate to, the listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Default path of the product listing.
pub const DEFAULT_LISTING_PATH: &str = "/admin/products";

/// A product listing location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ListingRoute {
    /// Path without query string.
    pub path: String,
    /// Value of the `q` parameter. Never `Some("")`.
    pub query: Option<String>,
    /// Value of the `page` parameter, 1-based.
    pub page: u32,
}

impl Default for ListingRoute {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_PATH)
    }
}

impl ListingRoute {
    /// Route to the first page of `path` with no query.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            page: 1,
        }
    }

    /// Set the query; an empty string removes the parameter.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = (!query.is_empty()).then(|| query.to_string());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// The query text, empty if absent.
    pub fn query_str(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Render as an href. `page` is only written when it is not the first page.
    pub fn to_href(&self) -> String {
        let mut params = Vec::new();
        if let Some(q) = &self.query {
            params.push(format!("q={}", urlencoding::encode(q)));
        }
        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }

        if params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, params.join("&"))
        }
    }

    /// Parse an href. Unknown parameters are ignored; a malformed `page`
    /// falls back to the first page, and an undecodable `q` is kept raw.
    pub fn parse(href: &str) -> Self {
        let (path, query_string) = match href.split_once('?') {
            Some((path, qs)) => (path, qs),
            None => (href, ""),
        };

        let mut route = Self::new(path);
        for pair in query_string.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let decoded = urlencoding::decode(&value)
                .map(|v| v.into_owned())
                .unwrap_or(value);
            match key {
                "q" => route = route.with_query(&decoded),
                "page" => route = route.with_page(decoded.parse().unwrap_or(1)),
                _ => {}
            }
        }
        route
    }
}

impl fmt::Display for ListingRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_href())
    }
}
