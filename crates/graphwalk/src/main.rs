//! Graphwalk CLI binary.

use anyhow::Result;
use graphwalk::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the graphwalk CLI.
///
/// All work is sequential file I/O, so a current-thread runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Example: RUST_LOG=graphwalk=debug,graphwalk_jsonl=trace graphwalk traverse 1
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("graphwalk=info,graphwalk_jsonl=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting graphwalk CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Graphwalk CLI completed successfully");
    Ok(())
}
