//! Output formatting.

use std::io::{self, Write};

use textproc_fetch::{FailureKind, FetchFailure, FetchSuccess};

/// Write one generated item per line.
pub fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Write a successful raw request: pretty JSON, or the status line for 204.
pub fn write_success(out: &mut impl Write, success: &FetchSuccess) -> io::Result<()> {
    match success {
        FetchSuccess::Json(value) => {
            let pretty = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
            writeln!(out, "{pretty}")
        }
        FetchSuccess::NoContent(response) => writeln!(out, "{}", response.status),
    }
}

/// One-line description of a failure including its payload.
pub fn describe_failure(failure: &FetchFailure) -> String {
    match (failure.kind(), failure.payload()) {
        (FailureKind::Http, Some(payload)) => format!("{failure}: {payload}"),
        _ => failure.to_string(),
    }
}
