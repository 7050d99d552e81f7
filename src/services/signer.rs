//! HMAC-SHA256 request signing.

use crate::error::Result;
use crate::models::params::ParameterSet;
use log::debug;
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer as HmacSigner;
use subtle::ConstantTimeEq;

/// Signs parameter sets with the shared API secret.
#[derive(Clone)]
pub struct Signer {
    key: PKey<Private>,
    debug: bool,
}

impl Signer {
    pub fn new(secret: &str) -> Result<Self> {
        Ok(Signer {
            key: PKey::hmac(secret.as_bytes())?,
            debug: false,
        })
    }

    /// Log the canonical string and signature of every signing call.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builds the string the signature is computed over.
    ///
    /// Every pair is written as `?key=value` in ascending key order, the
    /// first one included, so the result starts with `?`. The server
    /// reproduces this exact form.
    pub fn canonical_string(params: &ParameterSet) -> String {
        params
            .iter()
            .map(|(k, v)| format!("?{}={}", k, v))
            .collect()
    }

    /// HMAC-SHA256 of `message`, lowercase hex.
    pub fn sign_message(&self, message: &str) -> Result<String> {
        let mut signer = HmacSigner::new(MessageDigest::sha256(), &self.key)?;
        signer.update(message.as_bytes())?;
        let digest = signer.sign_to_vec()?;
        Ok(hex::encode(digest))
    }

    /// Signs the canonical form of `params`.
    pub fn sign(&self, params: &ParameterSet) -> Result<String> {
        let canonical = Self::canonical_string(params);
        let signature = self.sign_message(&canonical)?;

        if self.debug {
            debug!("Canonical string: {}", canonical);
            debug!("Signature: {}", signature);
        }

        Ok(signature)
    }

    /// Recomputes the signature of `params` and compares it with `signature`
    /// in constant time.
    pub fn verify(&self, params: &ParameterSet, signature: &str) -> Result<bool> {
        let expected = self.sign(params)?;
        Ok(expected.as_bytes().ct_eq(signature.as_bytes()).into())
    }
}
