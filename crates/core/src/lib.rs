//! # sf-core
//!
//! Search logic for storefront-search.
//!
//! This crate provides:
//! - The query input coordinator behind the search field
//! - Catalog search with pagination
//! - Autocomplete suggestion sources
//! - Configuration loading from `.storefront/` directory
//! - The search service answering UI operations
//!
//! ## Modules
//!
//! - [`coordinator`]: Search field state, visibility state machine, dispatch
//! - [`catalog`]: In-memory product catalog and search
//! - [`suggest`]: Suggestion source trait and implementations
//! - [`config`]: Configuration loading and management
//! - [`service`]: Op/Event loop serving the UI

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod service;
pub mod suggest;
