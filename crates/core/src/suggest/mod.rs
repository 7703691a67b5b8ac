//! Autocomplete suggestion sources.
//!
//! This module provides:
//! - The `SuggestionSource` trait implemented by every source
//! - `CatalogSuggestionSource`, which completes against the product catalog

pub mod base;
pub mod catalog_source;

pub use base::{SuggestError, SuggestionSource};
pub use catalog_source::CatalogSuggestionSource;
