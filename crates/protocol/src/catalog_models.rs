//! Product catalog and search response models.
//!
//! These mirror the JSON payloads exchanged with the storefront search
//! endpoint, so a response produced by the core can be handed to the web
//! client unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Default number of products per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Product identifier.
///
/// Catalog files carry either numeric or string ids, so both are accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, TS)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// A single catalog product.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    /// Marketing title; takes precedence over `name` when displayed.
    #[serde(default)]
    pub title: Option<String>,

    pub price: f64,

    /// Price before discount.
    #[serde(default)]
    pub original_price: Option<f64>,

    #[serde(default)]
    pub sport: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Name shown in listings: the title if present, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.name)
    }

    /// The original price, only when it is higher than the current price.
    pub fn discounted_from(&self) -> Option<f64> {
        self.original_price.filter(|orig| *orig > self.price)
    }

    /// Searchable text fields of the product.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            self.title.as_deref(),
            self.brand.as_deref(),
            self.category.as_deref(),
            self.sport.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Pagination block of a search response.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_products: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u32,
}

impl Pagination {
    /// Compute pagination for `total` matches viewed at `page` with `limit` per page.
    ///
    /// `total_pages` is never below 1 so an empty result still has a first page.
    pub fn compute(total: u32, page: u32, limit: u32) -> Self {
        let total_pages = total.div_ceil(limit.max(1)).max(1);
        Self {
            current_page: page,
            total_pages,
            total_products: total,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
            limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::compute(0, 1, DEFAULT_PAGE_SIZE)
    }
}

/// Optional exact-match filters applied on top of the text query.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct SearchFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.sport.is_none() && self.brand.is_none()
    }
}

/// Payload of a successful search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct SearchData {
    pub products: Vec<Product>,
    pub pagination: Pagination,
    pub query: String,
    pub filters: SearchFilters,
}

/// Envelope returned by the product search endpoint.
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "products": [],
///     "pagination": { "currentPage": 1, "totalPages": 1, ... },
///     "query": "shoes",
///     "filters": {}
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct SearchResponse {
    pub success: bool,
    pub data: SearchData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: Option<&str>, price: f64, original: Option<f64>) -> Product {
        Product {
            id: ProductId::Number(1),
            name: "Predator Ball".to_string(),
            title: title.map(str::to_string),
            price,
            original_price: original,
            sport: Some("Football".to_string()),
            brand: None,
            category: None,
        }
    }

    #[test]
    fn test_display_name_prefers_title() {
        assert_eq!(product(Some("Predator League"), 30.0, None).display_name(), "Predator League");
        assert_eq!(product(None, 30.0, None).display_name(), "Predator Ball");
        assert_eq!(product(Some(""), 30.0, None).display_name(), "Predator Ball");
    }

    #[test]
    fn test_discount_only_when_original_is_higher() {
        assert_eq!(product(None, 30.0, Some(45.0)).discounted_from(), Some(45.0));
        assert_eq!(product(None, 30.0, Some(30.0)).discounted_from(), None);
        assert_eq!(product(None, 30.0, None).discounted_from(), None);
    }

    #[test]
    fn test_pagination_compute() {
        let p = Pagination::compute(25, 2, 12);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next_page);
        assert!(p.has_prev_page);

        let last = Pagination::compute(25, 3, 12);
        assert!(!last.has_next_page);

        let empty = Pagination::compute(0, 1, 12);
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.has_next_page);
        assert!(!empty.has_prev_page);
    }

    #[test]
    fn test_large_numeric_id_deserializes() {
        let p: Product =
            serde_json::from_str(r#"{"id": 5000000000, "name": "Ball", "price": 10}"#).unwrap();
        assert_eq!(p.id, ProductId::Number(5_000_000_000));
        assert_eq!(p.id.to_string(), "5000000000");
    }

    #[test]
    fn test_filters_is_empty() {
        assert!(SearchFilters::default().is_empty());
        let brand = SearchFilters {
            brand: Some("adidas".to_string()),
            ..SearchFilters::default()
        };
        assert!(!brand.is_empty());
    }

    #[test]
    fn test_text_fields_skip_missing() {
        let p = product(None, 1.0, None);
        let fields: Vec<&str> = p.text_fields().collect();
        assert_eq!(fields, vec!["Predator Ball", "Football"]);
    }
}
