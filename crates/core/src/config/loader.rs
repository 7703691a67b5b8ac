//! Configuration file loader for `.storefront/` directory structure.
//!
//! This module provides functionality to load and parse all configuration files
//! from the `.storefront/` directory, including:
//! - `config.toml`: Search settings
//! - `products/*.yaml`, `products/*.yml`, `products/*.json`: Catalog products

use crate::catalog::Catalog;
use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use crate::config::CONFIG_DIR;
use sf_protocol::catalog_models::Product;
use sf_protocol::config_models::StorefrontConfig;
use std::path::Path;
use walkdir::WalkDir;

/// Loads all configuration from the `.storefront/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.storefront/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. If directories or files
/// are missing, returns the default configuration and an empty catalog
/// rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid syntax (TOML, YAML or JSON)
/// - Settings have invalid values
///
/// # Example
///
/// ```rust,no_run
/// use sf_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} products", config.catalog.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let sf_dir = root.join(CONFIG_DIR);

    // If .storefront doesn't exist, return default config
    if !sf_dir.exists() {
        tracing::debug!(dir = %sf_dir.display(), "no config directory, using defaults");
        return Ok(AppConfig::default());
    }

    let settings = load_settings(&sf_dir)?;
    let products = load_products(&sf_dir)?;
    tracing::info!(products = products.len(), "configuration loaded");

    Ok(AppConfig {
        settings,
        catalog: Catalog::new(products),
    })
}

/// Loads search settings from `config.toml`.
fn load_settings(sf_dir: &Path) -> ConfigResult<StorefrontConfig> {
    let config_path = sf_dir.join("config.toml");

    // If config.toml doesn't exist, return default
    if !config_path.exists() {
        return Ok(StorefrontConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: StorefrontConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    let search = &config.search;
    if !search.listing_path.starts_with('/') {
        return Err(ConfigError::InvalidConfig {
            path: config_path,
            reason: format!("listing-path must start with '/', got {:?}", search.listing_path),
        });
    }
    if search.page_size == 0 {
        return Err(ConfigError::InvalidConfig {
            path: config_path,
            reason: "page-size must be greater than 0".to_string(),
        });
    }

    Ok(config)
}

/// Loads all products from `products/*.{yaml,yml,json}`.
///
/// Each file holds a list of products. Files are read in name order so the
/// catalog order is stable.
fn load_products(sf_dir: &Path) -> ConfigResult<Vec<Product>> {
    let products_dir = sf_dir.join("products");

    // If products directory doesn't exist, return empty vector
    if !products_dir.exists() {
        return Ok(Vec::new());
    }

    let mut products = Vec::new();

    for entry in WalkDir::new(&products_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: products_dir.clone(),
            source,
        })?;

        let path = entry.path();
        let ext = path.extension().and_then(|s| s.to_str());
        if !matches!(ext, Some("yaml" | "yml" | "json")) {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let batch: Vec<Product> = if ext == Some("json") {
            serde_json::from_str(&content).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?
        };

        tracing::debug!(file = %path.display(), count = batch.len(), "loaded products");
        products.extend(batch);
    }

    Ok(products)
}
