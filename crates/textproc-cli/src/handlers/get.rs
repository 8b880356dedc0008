//! Raw request handler.
//!
//! Sends a request through the JSON request helper and prints the classified
//! outcome, which makes it easy to see how a given endpoint is treated.

use std::io::Write;

use textproc_fetch::{FetchClient, HeaderName, HeaderValue, HttpTransport, Method, RequestOptions};
use tracing::debug;

use crate::error::CliError;
use crate::presentation::write_success;

/// Arguments for the get command.
#[derive(Debug, Clone)]
pub struct GetArgs {
    pub url: String,
    pub method: String,
    pub data: Option<String>,
    /// `Name: value` pairs.
    pub headers: Vec<String>,
}

impl GetArgs {
    /// Build request options from the raw arguments.
    pub fn to_options(&self) -> Result<RequestOptions, CliError> {
        let method = Method::from_bytes(self.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| CliError::Arguments(format!("invalid HTTP method '{}'", self.method)))?;

        let mut options = RequestOptions::new().with_method(method);
        for raw in &self.headers {
            let (name, value) = parse_header(raw)?;
            options = options.with_header(name, value);
        }
        if let Some(ref data) = self.data {
            options = options.with_body(data.clone());
        }
        Ok(options)
    }
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), CliError> {
    let invalid = || CliError::Arguments(format!("invalid header '{raw}', expected 'Name: value'"));

    let (name, value) = raw.split_once(':').ok_or_else(invalid)?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| invalid())?;
    let value = HeaderValue::from_str(value.trim()).map_err(|_| invalid())?;
    Ok((name, value))
}

/// Execute the get command.
///
/// Success output goes to `out`; a failure is returned with its kind,
/// status and payload folded into the message.
pub async fn execute<T: HttpTransport>(
    client: &FetchClient<T>,
    args: GetArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut options = args.to_options()?;
    let success = client.request(&args.url, &mut options).await?;
    debug!(url = %args.url, no_content = success.is_no_content(), "Request succeeded");
    write_success(out, &success)?;
    Ok(())
}
