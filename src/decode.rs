use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Decodes a response body into a string-keyed JSON object.
pub fn decode(bytes: &[u8]) -> Result<Map<String, Value>> {
    if bytes.is_empty() {
        return Err(Error::NoData);
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|source| Error::DecodeFailure { source })?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(Error::NotAnObject),
    }
}
