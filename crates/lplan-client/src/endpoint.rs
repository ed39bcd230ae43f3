//! Generation endpoint address

use lplan_core::prelude::*;
use url::Url;

/// Endpoint used when neither the config file nor the CLI names one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/gerar";

/// Parse and validate an endpoint URL.
///
/// Only absolute `http`/`https` URLs with a host are accepted.
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| Error::invalid_endpoint(trimmed, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::invalid_endpoint(
                trimmed,
                format!("unsupported scheme '{other}', expected http or https"),
            ))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::invalid_endpoint(trimmed, "missing host"));
    }

    Ok(url)
}

/// The default endpoint as a parsed URL
pub fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
}
