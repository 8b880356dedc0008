//! CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use textproc_cli::{Cli, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so it can supply TEXTPROC_BASE_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = handlers::dispatch(&cli.base_url, command).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}

/// Log to stderr so generated text on stdout stays pipeable.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
