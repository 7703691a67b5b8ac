//! Global configuration models for `.storefront/config.toml`.
//!
//! This module defines the structure of the configuration file that
//! controls search field timing and listing behavior.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

use crate::catalog_models::DEFAULT_PAGE_SIZE;
use crate::route::DEFAULT_LISTING_PATH;

/// Represents global settings from `.storefront/config.toml`.
///
/// # Example
///
/// ```toml
/// # .storefront/config.toml
/// [search]
/// listing-path = "/admin/products"
/// blur-delay-ms = 200
/// debounce-ms = 250
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub search: SearchSettings,
}

/// Settings for the search field and listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchSettings {
    /// Destination of default navigation when no submit handler is supplied.
    pub listing_path: String,

    /// Grace period between losing focus and hiding the suggestion panel.
    ///
    /// Lets a click on a suggestion land before the panel disappears.
    pub blur_delay_ms: u64,

    /// Quiet period after the last keystroke before suggestions are requested.
    pub debounce_ms: u64,

    /// Maximum number of suggestions shown in the panel.
    pub max_suggestions: u32,

    /// Products per listing page.
    pub page_size: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            blur_delay_ms: 200,
            debounce_ms: 250,
            max_suggestions: 8,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
