//! Pattern command handler.

use std::io::Write;

use textproc_fetch::{HttpTransport, TextServiceClient};

use crate::error::CliError;
use crate::presentation::write_lines;

/// Execute the pattern command.
pub async fn execute<T: HttpTransport>(
    client: &TextServiceClient<T>,
    pattern: &str,
    count: u32,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if pattern.trim().is_empty() {
        return Err(CliError::Arguments("pattern must not be empty".to_string()));
    }
    let lines = client.generate_from_pattern(pattern, count).await?;
    write_lines(out, &lines)?;
    Ok(())
}
