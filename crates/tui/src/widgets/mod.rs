//! TUI widgets module.
//!
//! This module contains reusable widgets for the TUI.

pub mod product_list;
pub mod search_field;

pub use search_field::SearchField;
