//! Request decoding and response helpers shared by all endpoints
//!
//! Bodies are decoded the way appliance API clients expect: object keys
//! match field names case-insensitively, and `null` (as the whole body or
//! as a field value) leaves the affected fields at their defaults.

use crate::error::{Error, Result};
use axum::{
    body::{Body, Bytes},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Largest request body a handler will buffer
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Respond 200 with `value` encoded as JSON
pub fn status_ok<T: Serialize>(value: &T) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

/// Buffer a request body of at most `limit` bytes
///
/// Failures are logged with the request method and URI, like [`decode`].
pub async fn read_body(method: &Method, uri: &Uri, body: Body, limit: usize) -> Result<Bytes> {
    axum::body::to_bytes(body, limit).await.map_err(|e| {
        tracing::warn!(%method, %uri, error = %e, "Failed to read request body");
        Error::Body(e.to_string())
    })
}

/// Decode a JSON request body
///
/// Failures are logged with the request method and URI before being
/// returned, so callers only need to pick a status code.
pub fn decode<T: DeserializeOwned>(method: &Method, uri: &Uri, body: &[u8]) -> Result<T> {
    serde_json::from_slice::<Value>(body)
        .and_then(|value| serde_json::from_value(normalize(value)))
        .map_err(|e| {
            tracing::warn!(%method, %uri, error = %e, "Failed to decode request body");
            e.into()
        })
}

/// Lowercase object keys and drop `null` members; a bare `null` becomes `{}`
fn normalize(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(Map::new()),
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_lowercase(), normalize(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}
