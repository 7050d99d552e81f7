use super::params::ParameterSet;
use reqwest::Method;
use serde::Serialize;

/// Everything needed to describe one outbound call before it is signed.
///
/// `B` is the JSON body type; calls without a payload use the default `()`
/// and leave `body` empty.
#[derive(Debug, Clone)]
pub struct SignedRequestSpec<B = ()> {
    pub method: Method,
    pub path: String,
    pub body: Option<B>,
    /// Parameters covered by the signature, besides `nonce` and `timestamp`.
    pub params: ParameterSet,
    /// Literal query parameters appended after the authentication ones.
    pub query: ParameterSet,
}

impl SignedRequestSpec<()> {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn new(method: Method, path: impl Into<String>) -> Self {
        SignedRequestSpec {
            method,
            path: path.into(),
            body: None,
            params: ParameterSet::new(),
            query: ParameterSet::new(),
        }
    }
}

impl<B: Serialize> SignedRequestSpec<B> {
    /// Replaces the body, changing the body type.
    pub fn json<T: Serialize>(self, body: T) -> SignedRequestSpec<T> {
        SignedRequestSpec {
            method: self.method,
            path: self.path,
            body: Some(body),
            params: self.params,
            query: self.query,
        }
    }

    /// Adds a parameter to the signed set.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Adds a literal query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key, value);
        self
    }
}
