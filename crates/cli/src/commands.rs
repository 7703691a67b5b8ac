//! One-shot commands: `storefront search` and `storefront suggest`.

use color_eyre::Result;
use colored::Colorize;
use sf_core::catalog::SearchRequest;
use sf_core::config::loader::load_config;
use sf_core::suggest::{CatalogSuggestionSource, SuggestionSource};
use sf_protocol::{Product, SearchResponse};
use std::fmt::Write;
use std::path::Path;

/// Print one page of search results.
pub async fn cmd_search(
    root: &Path,
    query: &str,
    page: u32,
    limit: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = load_config(root).await?;
    let limit = limit.unwrap_or(config.settings.search.page_size);
    let request = SearchRequest::new(query).page(page).limit(limit);
    let response = config.catalog.search(&request);
    tracing::debug!(
        query,
        page,
        total = response.data.pagination.total_products,
        "search finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", format_results(&response));
    }
    Ok(())
}

/// Print suggestions for a keyword, one per line.
pub async fn cmd_suggest(root: &Path, keyword: &str, limit: Option<usize>) -> Result<()> {
    let config = load_config(root).await?;
    let limit = limit.unwrap_or(config.settings.search.max_suggestions as usize);
    let source = CatalogSuggestionSource::new(&config.catalog);
    let items = source.suggest(keyword, limit).await?;

    if items.is_empty() {
        println!("{}", format!("No suggestions for \"{keyword}\"").dimmed());
    }
    for item in items {
        println!("{item}");
    }
    Ok(())
}

/// Human-readable rendering of a results page.
pub fn format_results(response: &SearchResponse) -> String {
    let data = &response.data;
    let pagination = &data.pagination;
    let mut out = String::new();

    let total = pagination.total_products;
    let noun = if total == 1 { "product" } else { "products" };
    let header = if data.query.is_empty() {
        format!("{total} {noun} found")
    } else {
        format!("{total} {noun} found for \"{}\"", data.query)
    };
    let _ = writeln!(out, "{}", header.bold());

    for product in &data.products {
        let _ = writeln!(out, "  {}", format_product(product));
    }

    let _ = writeln!(
        out,
        "{}",
        format!(
            "Page {} of {}",
            pagination.current_page, pagination.total_pages
        )
        .dimmed()
    );
    out
}

fn format_product(product: &Product) -> String {
    let mut line = format!(
        "{} {}",
        product.display_name().bold(),
        format!("${:.2}", product.price).green()
    );
    if let Some(original) = product.discounted_from() {
        line.push_str(&format!(" {}", format!("${original:.2}").strikethrough().dimmed()));
    }

    let details: Vec<&str> = [product.brand.as_deref(), product.sport.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        line.push_str(&format!("  {}", details.join(" · ").cyan()));
    }
    line
}
