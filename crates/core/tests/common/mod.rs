//! Common test utilities and helpers for integration tests.
//!
//! This module provides shared functionality across all integration tests:
//! - Test fixtures (sample catalogs, `.storefront/` projects)
//! - Custom assertions
//! - Mock suggestion sources

pub mod assertions;
pub mod fixtures;
pub mod mock_sources;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_sources::*;
