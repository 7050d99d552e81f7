use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Unwraps a response whose payload sits under a single root key, such as
/// `{"exam": {...}}` or `{"exams": [...]}`.
pub fn unwrap_envelope<T: DeserializeOwned>(mut root: Value, key: &str) -> Result<T> {
    let payload = root
        .as_object_mut()
        .and_then(|map| map.remove(key))
        .ok_or_else(|| Error::Envelope {
            key: key.to_string(),
        })?;

    T::deserialize(&payload).map_err(|source| Error::Decode {
        source,
        body: payload.to_string(),
    })
}
