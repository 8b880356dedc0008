//! Generator command handler (drugs, insults, bands, ...).

use std::io::Write;

use textproc_fetch::{GenerateQuery, HttpTransport, TextServiceClient};
use tracing::info;

use crate::error::CliError;
use crate::presentation::write_lines;

/// Execute a generator command.
///
/// Prints one generated item per line. An empty result prints nothing.
pub async fn execute<T: HttpTransport>(
    client: &TextServiceClient<T>,
    query: &GenerateQuery,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let lines = client.generate(query).await?;
    info!(kind = %query.kind, received = lines.len(), "Generated text");
    write_lines(out, &lines)?;
    Ok(())
}
