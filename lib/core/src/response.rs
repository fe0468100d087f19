//! Hit extraction from search response envelopes
//!
//! Only the `hits` array is read. Pagination, facets and the rest of the
//! envelope are left to the caller.

use serde_json::Value;

use crate::{Error, HitRecord, Result};

/// Key holding the hit list in a search response
pub const HITS_KEY: &str = "hits";

/// Pull the hits out of a single search response, preserving their order
pub fn hits_from_response(response: &Value) -> Result<Vec<HitRecord>> {
    let hits = response
        .get(HITS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Serialization(format!("response missing a valid `{}` array", HITS_KEY)))?;

    Ok(hits.iter().cloned().map(HitRecord::new).collect())
}

/// Same as [`hits_from_response`], consuming the response to avoid copies
pub fn into_hits(response: Value) -> Result<Vec<HitRecord>> {
    match response {
        Value::Object(mut map) => match map.remove(HITS_KEY) {
            Some(Value::Array(hits)) => Ok(hits.into_iter().map(HitRecord::new).collect()),
            _ => Err(Error::Serialization(format!(
                "response missing a valid `{}` array",
                HITS_KEY
            ))),
        },
        _ => Err(Error::Serialization("response is not a JSON object".to_string())),
    }
}
