use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::requests::SignedRequestSpec;
use crate::models::responses::unwrap_envelope;
use crate::services::nonce::{Clock, NonceSource, RandomNonce, SystemClock};
use crate::services::request::RequestBuilder;
use crate::services::transport::Transport;
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Path prefix shared by every v3 endpoint.
pub(crate) const API_PREFIX: &str = "/api/v3";

/// Blocking client for the ProctorExam v3 API.
///
/// Each call performs exactly one signed round trip. The client holds no
/// mutable state and can be shared between threads.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    builder: RequestBuilder,
    transport: Transport,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = RequestBuilder::new(&config, Arc::new(RandomNonce), Arc::new(SystemClock))?;
        let transport = Transport::new(&config)?;

        Ok(Client {
            config,
            builder,
            transport,
        })
    }

    /// Build a client from `PE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn with_nonce_source(mut self, nonce: Arc<dyn NonceSource>) -> Self {
        self.builder = self.builder.with_nonce_source(nonce);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.builder = self.builder.with_clock(clock);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Signs and sends `spec`, decoding the response body as `T`.
    pub fn send<T, B>(&self, spec: &SignedRequestSpec<B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        info!("Sending {} {}", spec.method, spec.path);
        let request = self.builder.build(spec)?;
        self.transport.execute(request)
    }

    /// Like [`Client::send`], for responses wrapped under a single root key.
    pub(crate) fn fetch<T: DeserializeOwned>(
        &self,
        spec: &SignedRequestSpec,
        key: &str,
    ) -> Result<T> {
        let root: Value = self.send(spec)?;
        unwrap_envelope(root, key)
    }
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}
