use crate::capabilities::HttpClient;
use crate::error::CliError;
use std::io::Write;

pub fn run_http(http: &dyn HttpClient, url: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let body = http.get(url).map_err(|e| CliError::Http {
        reason: format!("{e:#}"),
    })?;
    out.write_all(&body)?;
    Ok(())
}
