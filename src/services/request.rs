use super::nonce::{Clock, NonceSource};
use super::signer::Signer;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::requests::SignedRequestSpec;
use reqwest::blocking::{Body, Request};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Query keys the builder always sets itself.
const AUTH_QUERY_KEYS: [&str; 3] = ["nonce", "timestamp", "signature"];

/// Turns a [`SignedRequestSpec`] into a signed, ready-to-send request.
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: Url,
    headers: HeaderMap,
    signer: Signer,
    nonce: Arc<dyn NonceSource>,
    clock: Arc<dyn Clock>,
}

impl RequestBuilder {
    pub fn new(
        config: &ClientConfig,
        nonce: Arc<dyn NonceSource>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let mut base_url = config.base_url().clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value("Accept", &config.accept())?);
        headers.insert(USER_AGENT, header_value("User-Agent", config.user_agent())?);
        let mut token = header_value(
            "Authorization",
            &format!("Token token={}", config.api_key()),
        )?;
        token.set_sensitive(true);
        headers.insert(AUTHORIZATION, token);

        Ok(RequestBuilder {
            base_url,
            headers,
            signer: Signer::new(config.api_secret())?.with_debug(config.debug()),
            nonce,
            clock,
        })
    }

    pub fn with_nonce_source(mut self, nonce: Arc<dyn NonceSource>) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Resolves `path` below the base URL, keeping any prefix the base
    /// carries.
    ///
    /// Fails with [`Error::Path`] when `..` segments would climb above the
    /// base prefix.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        // "./" keeps a path like "a:b" from being read as an absolute URL
        let relative = format!("./{}", path.trim_start_matches('/'));
        let url = self.base_url.join(&relative)?;
        if !url.path().starts_with(self.base_url.path()) {
            return Err(Error::Path(format!(
                "{:?} resolves outside of {}",
                path,
                self.base_url.path()
            )));
        }
        Ok(url)
    }

    pub fn build<B: Serialize>(&self, spec: &SignedRequestSpec<B>) -> Result<Request> {
        let mut url = self.resolve(&spec.path)?;

        let body = spec
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(Error::Encode)?;

        let nonce = self.nonce.next_nonce().to_string();
        let timestamp = self.clock.now_millis().to_string();

        let mut params = spec.params.clone();
        params.insert("nonce", &nonce).insert("timestamp", &timestamp);
        let signature = self.signer.sign(&params)?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("nonce", &nonce)
                .append_pair("timestamp", &timestamp)
                .append_pair("signature", &signature);
            for (key, value) in spec.query.iter() {
                if AUTH_QUERY_KEYS.contains(&key) {
                    continue;
                }
                query.append_pair(key, value);
            }
        }

        let mut request = Request::new(spec.method.clone(), url);
        *request.headers_mut() = self.headers.clone();
        if let Some(body) = body {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(Body::from(body));
        }

        Ok(request)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Config(format!("invalid {} header value: {}", name, e)))
}
