//! Main entry point for the sf-tui binary.
//!
//! This executable opens the product listing of the project in the current
//! directory.

use anyhow::Result;
use sf_tui::{run_app, AppOptions};

#[tokio::main]
async fn main() -> Result<()> {
    run_app(AppOptions::default()).await
}
