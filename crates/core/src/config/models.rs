//! Configuration models that aggregate all settings.
//!
//! This module provides the unified `AppConfig` structure that combines
//! the search settings and the product catalog into a single object.

use crate::catalog::Catalog;
use sf_protocol::config_models::StorefrontConfig;

/// Unified application configuration loaded from `.storefront/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Search settings
/// - `products/*.{yaml,yml,json}`: Catalog products
///
/// # Example
///
/// ```rust,no_run
/// use sf_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} products, listing at {}",
///          config.catalog.len(),
///          config.settings.search.listing_path);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Settings from `config.toml`.
    pub settings: StorefrontConfig,

    /// All products loaded from `products/`.
    pub catalog: Catalog,
}
