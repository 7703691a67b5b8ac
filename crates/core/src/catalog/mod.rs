//! In-memory product catalog with paginated text search.
//!
//! A query matches a product when every whitespace-separated term occurs,
//! case-insensitively, in one of its text fields (name, title, brand,
//! category, sport). Filters are exact case-insensitive matches.

use sf_protocol::{Pagination, Product, SearchData, SearchFilters, SearchResponse, DEFAULT_PAGE_SIZE};

/// Parameters of one listing page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// 1-based; 0 is treated as 1.
    pub page: u32,
    /// Products per page; 0 falls back to the default page size.
    pub limit: u32,
    pub filters: SearchFilters,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            filters: SearchFilters::default(),
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// The set of products available for search and suggestions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching the query and filters, in catalog order.
    pub fn matching<'a>(
        &'a self,
        query: &str,
        filters: &'a SearchFilters,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        self.products
            .iter()
            .filter(move |p| matches_terms(p, &terms) && matches_filters(p, filters))
    }

    /// Run a search and build the response envelope.
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let page = request.page.max(1);
        let limit = if request.limit == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            request.limit
        };

        let matches: Vec<&Product> = self.matching(&request.query, &request.filters).collect();
        let total = u32::try_from(matches.len()).unwrap_or(u32::MAX);
        let offset = (page as usize - 1).saturating_mul(limit as usize);

        let products = matches
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect();

        SearchResponse {
            success: true,
            data: SearchData {
                products,
                pagination: Pagination::compute(total, page, limit),
                query: request.query.trim().to_string(),
                filters: request.filters.clone(),
            },
        }
    }
}

fn matches_terms(product: &Product, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let haystack: Vec<String> = product.text_fields().map(str::to_lowercase).collect();
    terms
        .iter()
        .all(|term| haystack.iter().any(|field| field.contains(term.as_str())))
}

fn matches_filters(product: &Product, filters: &SearchFilters) -> bool {
    if filters.is_empty() {
        return true;
    }
    field_matches(product.category.as_deref(), filters.category.as_deref())
        && field_matches(product.sport.as_deref(), filters.sport.as_deref())
        && field_matches(product.brand.as_deref(), filters.brand.as_deref())
}

fn field_matches(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value.is_some_and(|v| v.eq_ignore_ascii_case(wanted)),
    }
}
