//! Command handlers.
//!
//! Handlers are generic over the transport so they can be exercised against
//! canned responses; [`dispatch`] wires them to the reqwest-backed clients.

pub mod generate;
pub mod get;
pub mod pattern;

use std::io::Write;

use textproc_fetch::{
    DefaultFetchClient, DefaultTextServiceClient, FetchClientConfig, HttpTransport,
    TextServiceClient,
};
use tracing::debug;

use crate::commands::Commands;
use crate::error::CliError;

/// Run `command` against the service at `base_url`, writing to stdout.
///
/// `get` takes an absolute URL and never touches the base URL; every other
/// command needs a valid one.
pub async fn dispatch(base_url: &str, command: Commands) -> Result<(), CliError> {
    let config = FetchClientConfig::new().with_base_url(base_url);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Commands::Get {
        url,
        method,
        data,
        headers,
    } = command
    {
        let client = DefaultFetchClient::new(&config)?;
        let args = get::GetArgs {
            url,
            method,
            data,
            headers,
        };
        return get::execute(&client, args, &mut out).await;
    }

    let client = DefaultTextServiceClient::new(&config)?;
    run_service(&client, command, &mut out).await
}

/// Run a TextService command (`pattern` or a generator) against `client`.
pub async fn run_service<T: HttpTransport>(
    client: &TextServiceClient<T>,
    command: Commands,
    out: &mut impl Write,
) -> Result<(), CliError> {
    debug!(base_url = %client.base_url(), ?command, "Running TextService command");

    match command {
        Commands::Pattern { pattern, count } => {
            pattern::execute(client, &pattern, count, out).await
        }
        ref generator => {
            let query = generator.generate_query().ok_or_else(|| {
                CliError::Arguments(format!("{generator:?} is not a TextService command"))
            })?;
            generate::execute(client, &query, out).await
        }
    }
}
