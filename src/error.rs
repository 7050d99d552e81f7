use serde::de::DeserializeOwned;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of a failure, for callers that only need to branch on
/// where a call went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client configuration was missing or invalid.
    Config,
    /// The outbound request could not be assembled or signed.
    Build,
    /// The request did not complete, or the server answered with a non-2xx status.
    Transport,
    /// The response body was not the JSON shape the caller asked for.
    Decode,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to resolve request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid request path: {0}")]
    Path(String),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to sign request: {0}")]
    Signing(#[from] openssl::error::ErrorStack),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Response is missing the `{key}` envelope")]
    Envelope { key: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Url(_) | Error::Path(_) | Error::Encode(_) | Error::Signing(_) => {
                ErrorKind::Build
            }
            Error::Transport(_) | Error::Status { .. } => ErrorKind::Transport,
            Error::Decode { .. } | Error::Envelope { .. } => ErrorKind::Decode,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body kept on status and decode failures.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Status { body, .. } | Error::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Decodes the raw response body into a vendor-specific error payload.
    ///
    /// Returns `None` when there is no body or it does not match `T`.
    pub fn decode_body<T: DeserializeOwned>(&self) -> Option<T> {
        self.body().and_then(|body| serde_json::from_str(body).ok())
    }
}
