//! # sf-protocol
//!
//! Core protocol definitions and data models for storefront-search.
//!
//! This crate defines all shared data structures used for:
//! - Catalog files and search responses
//! - Listing routes (`/admin/products?q=...`)
//! - Configuration file parsing (`.storefront/config.toml`)
//! - Inter-process communication between TUI and Core
//!
//! ## Modules
//!
//! - [`catalog_models`]: Products, pagination and search responses
//! - [`config_models`]: Global configuration from config.toml
//! - [`route`]: Listing route rendering and parsing
//! - [`ipc`]: Operations and Events for Core-TUI communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: serde, ts-rs and urlencoding
//! - TypeScript generation: All types derive `TS` for web client compatibility
//! - Independent compilation: No dependencies on other storefront-search crates

pub mod catalog_models;
pub mod config_models;
pub mod ipc;
pub mod route;

// Re-export all public types for convenience
pub use catalog_models::*;
pub use config_models::*;
pub use ipc::*;
pub use route::*;
