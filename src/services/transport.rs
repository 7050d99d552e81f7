use crate::config::ClientConfig;
use crate::error::{Error, Result};
use log::{debug, warn};
use reqwest::blocking::{Client, Request};
use serde::de::DeserializeOwned;

/// Sends built requests and decodes their JSON bodies.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    debug: bool,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Transport {
            client,
            debug: config.debug(),
        })
    }

    /// Executes `request` and decodes the full response body as `T`.
    ///
    /// Non-2xx responses fail with [`Error::Status`] carrying the raw body.
    pub fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        if self.debug {
            debug!("Request:\n{}", format_request(&request));
        }

        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.client.execute(request)?;
        let status = response.status();
        let body = response.text()?;

        if self.debug {
            debug!("Response {}:\n{}", status, body);
        }

        if !status.is_success() {
            warn!("{} {} returned {}", method, path, status);
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            warn!("Failed to decode response of {} {}: {}", method, path, source);
            Error::Decode { source, body }
        })
    }
}

/// Plain-text rendering of a request: the request line followed by one
/// `name: value` line per header.
pub fn format_request(request: &Request) -> String {
    let mut dump = format!("{} {}\n", request.method(), request.url());
    if let Some(host) = request.url().host_str() {
        dump.push_str(&format!("host: {}\n", host));
    }
    for (name, value) in request.headers() {
        dump.push_str(&format!(
            "{}: {}\n",
            name,
            value.to_str().unwrap_or("<binary>")
        ));
    }
    if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
        dump.push('\n');
        dump.push_str(&String::from_utf8_lossy(body));
    }
    dump
}
