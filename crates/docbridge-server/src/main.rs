//! Docbridge MCP server entry point.
//!
//! Serves a Markdown documentation tree over the MCP stdio transport.
//!
//! # Usage
//!
//! ```bash
//! docbridge --docs-dir /srv/docs
//! ```
//!
//! Or configure in your MCP client:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "docbridge": {
//!       "command": "docbridge",
//!       "env": { "DOCS_DIR": "/srv/docs" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use docbridge_core::{DocsReader, PathGuard, Settings};
use docbridge_server::service::DocsService;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Read-only MCP access to a Markdown documentation tree.
#[derive(Parser, Debug)]
#[command(name = "docbridge")]
#[command(version, about, long_about = None)]
struct Args {
    /// Documentation root directory (overrides the config file)
    #[arg(long, env = "DOCS_DIR")]
    docs_dir: Option<PathBuf>,

    /// Settings file (default: platform config dir, docbridge/config.toml)
    #[arg(long, env = "DOCBRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging to stderr (stdout is for MCP protocol)
    let default_filter = if args.verbose {
        "debug"
    } else {
        "info,docbridge_server=debug,docbridge_core=info"
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    tracing::info!("Starting docbridge v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load_or_default(args.config.as_deref())
        .context("Failed to load settings")?
        .with_docs_dir(args.docs_dir);

    let guard = PathGuard::new(&settings.docs_dir);
    if guard.root().is_dir() {
        tracing::info!("Serving documentation from {}", guard.root().display());
    } else {
        tracing::warn!(
            "Documentation root {} is not a directory; all tools will return empty results",
            guard.root().display()
        );
    }

    // Create and run the service with stdio transport
    let service = DocsService::new(DocsReader::new(guard))
        .serve(stdio())
        .await?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
