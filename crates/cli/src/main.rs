//! `storefront`: browse and search a product catalog from the terminal.

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::{cmd_search, cmd_suggest};
use logging::{init_cli_logging, init_tui_logging};

#[derive(Parser, Debug)]
#[command(name = "storefront", version)]
#[command(about = "Browse and search a product catalog")]
#[command(after_help = "\
EXAMPLES:
  storefront                          # Open the product listing
  storefront --query \"running\"        # Open the listing filtered by a query
  storefront search ball --page 2     # Print one page of results
  storefront suggest run              # Print autocomplete suggestions")]
struct Cli {
    /// Project root containing `.storefront/`
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Listing href to open, e.g. "/admin/products?q=ball&page=2"
    #[arg(long)]
    route: Option<String>,

    /// Initial search query
    #[arg(short, long)]
    query: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalog and print one page of results
    Search {
        /// Search query (all terms must match)
        #[arg(default_value = "")]
        query: String,
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Products per page (default: configured page size)
        #[arg(short, long)]
        limit: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print autocomplete suggestions for a keyword
    Suggest {
        keyword: String,
        /// Maximum suggestions (default: configured maximum)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        // Without a subcommand, launch the TUI
        None => {
            let _guard = init_tui_logging(&cli.root);
            let options = sf_tui::AppOptions {
                root: cli.root,
                route: cli.route,
                query: cli.query,
            };
            sf_tui::run_app(options).await.map_err(|e| eyre!(e))
        }
        Some(Commands::Search {
            query,
            page,
            limit,
            json,
        }) => {
            init_cli_logging();
            cmd_search(&cli.root, &query, page, limit, json).await
        }
        Some(Commands::Suggest { keyword, limit }) => {
            init_cli_logging();
            cmd_suggest(&cli.root, &keyword, limit).await
        }
    }
}
