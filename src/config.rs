use crate::error::{Error, Result};
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_VENDOR: &str = "procwise";
pub const DEFAULT_USER_AGENT: &str = concat!("proctorexam-rs/", env!("CARGO_PKG_VERSION"));

const ENV_ENDPOINT: &str = "PE_ENDPOINT";
const ENV_API_KEY: &str = "PE_API_KEY";
const ENV_API_SECRET: &str = "PE_API_SECRET_KEY";
const ENV_USER_AGENT: &str = "PE_USER_AGENT";
const ENV_TIMEOUT_SECS: &str = "PE_TIMEOUT_SECS";
const ENV_DEBUG: &str = "PE_DEBUG";

/// Connection settings for one API client. Validated on construction and
/// read-only afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    api_key: String,
    api_secret: String,
    user_agent: String,
    vendor: String,
    timeout: Duration,
    debug: bool,
}

impl ClientConfig {
    /// Create a configuration from explicit values.
    ///
    /// Fails when the base URL is not an absolute http(s) URL, or when the
    /// key or secret is empty.
    pub fn new(base_url: &str, api_key: &str, api_secret: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {}", base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL must be an http(s) URL, got {}",
                base_url
            )));
        }
        if api_key.trim().is_empty() {
            return Err(Error::Config("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(Error::Config("API secret is empty".to_string()));
        }

        Ok(ClientConfig {
            base_url,
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            vendor: DEFAULT_VENDOR.to_string(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        })
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a dotenv file without touching the process
    /// environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;

        let mut vars = HashMap::new();
        for entry in entries {
            let (key, value) = entry
                .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} environment variable is required", key)))
        };

        let mut config = Self::new(
            &required(ENV_ENDPOINT)?,
            &required(ENV_API_KEY)?,
            &required(ENV_API_SECRET)?,
        )?;

        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config = config.with_user_agent(&user_agent);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(debug) = lookup(ENV_DEBUG) {
            config = config.with_debug(matches!(
                debug.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }

        info!(
            "Loaded API configuration for {}",
            config.base_url.host_str().unwrap_or_default()
        );
        Ok(config)
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Vendor segment of the `Accept` media type.
    pub fn with_vendor(mut self, vendor: &str) -> Self {
        self.vendor = vendor.to_string();
        self
    }

    /// Enable dumps of signing input, requests and raw response bodies at
    /// debug log level. These contain the API key and signatures.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Base URL with any userinfo password masked, for logs.
    pub fn redacted_base_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if url.password().is_some() {
            // only fails for URLs that cannot carry credentials
            let _ = url.set_password(Some("[REDACTED]"));
        }
        url
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn accept(&self) -> String {
        format!("application/vnd.{}.v3", self.vendor)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.redacted_base_url().as_str())
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .field("vendor", &self.vendor)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}
