//! Test fixtures for creating sample catalogs and projects.

use sf_protocol::catalog_models::{Product, ProductId};
use tempfile::TempDir;

/// Build a product with the fields used by search and suggestions.
#[allow(dead_code)]
pub fn product(id: u64, name: &str, brand: &str, sport: &str, category: &str) -> Product {
    Product {
        id: ProductId::Number(id),
        name: name.to_string(),
        title: None,
        price: 100.0,
        original_price: None,
        sport: Some(sport.to_string()),
        brand: Some(brand.to_string()),
        category: Some(category.to_string()),
    }
}

/// A small sporting goods catalog.
#[allow(dead_code)]
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Ultraboost Light", "adidas", "Running", "Shoes"),
        product(2, "Adizero SL", "adidas", "Running", "Shoes"),
        product(3, "Running Shorts", "adidas", "Running", "Apparel"),
        product(4, "Predator League Ball", "adidas", "Football", "Balls"),
        product(5, "Copa Pure Boots", "adidas", "Football", "Shoes"),
        product(6, "Rugby Ball", "Gilbert", "Rugby", "Balls"),
    ]
}

/// Create a temporary project directory with a `.storefront/` configuration.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    std::fs::create_dir_all(root.join(".storefront/products"))?;

    let config_toml = r#"
[search]
listing-path = "/admin/products"
blur-delay-ms = 200
debounce-ms = 50
max-suggestions = 3
page-size = 2
"#;
    std::fs::write(root.join(".storefront/config.toml"), config_toml)?;

    let products_yaml = r#"
- id: 1
  name: Ultraboost Light
  price: 190
  original_price: 220
  sport: Running
  brand: adidas
  category: Shoes
- id: 2
  name: Running Shorts
  price: 35
  sport: Running
  brand: adidas
  category: Apparel
- id: 3
  name: Predator League Ball
  price: 30
  sport: Football
  brand: adidas
  category: Balls
"#;
    std::fs::write(root.join(".storefront/products/catalog.yaml"), products_yaml)?;

    Ok(temp_dir)
}
