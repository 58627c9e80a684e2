use reqwest::blocking::Client;
use url::Url;

use crate::error::{Error, Result};

pub fn parse_endpoint(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| Error::InvalidEndpoint {
        url: url.to_string(),
        source,
    })
}

/// Issues a single GET and returns the response body.
pub fn download(client: &Client, endpoint: &Url) -> Result<Vec<u8>> {
    let body = client
        .get(endpoint.clone())
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map_err(|source| Error::TransportFailure { source })?;

    tracing::info!("Downloaded {} bytes", body.len());

    if body.is_empty() {
        return Err(Error::NoData);
    }

    Ok(body.to_vec())
}
