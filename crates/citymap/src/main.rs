//! Citymap CLI binary.

use anyhow::Result;
use citymap::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the citymap CLI.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=citymap=debug,citygraph=trace cargo run -- route 1 8
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("citymap=info,citygraph=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting citymap CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Citymap CLI completed successfully");
    Ok(())
}
