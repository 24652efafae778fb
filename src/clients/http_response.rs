//! Normalized responses from the Open Platform.
//!
//! Shopee wraps results in `{"error": "", "message": "", "response": {...}}`.
//! [`normalize`] unwraps that envelope into an [`ApiResponse`] or an
//! [`ApiResponseError`].

use std::path::Path;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::errors::{ApiError, ApiResponseError};

/// The success value of a dispatched call.
///
/// Most endpoints answer with JSON; document downloads answer with raw
/// bytes (PDF, ZIP), which are passed through untouched.
///
/// # Example
///
/// ```rust
/// use shopee_api::ApiResponse;
/// use serde_json::json;
///
/// let response = ApiResponse::Json(json!({"shop_name": "Demo"}));
/// assert_eq!(response.as_json().unwrap()["shop_name"], "Demo");
/// assert!(!response.is_raw());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// A parsed JSON object or array.
    Json(Value),
    /// A non-JSON or scalar body, byte for byte.
    Raw(Bytes),
}

impl ApiResponse {
    /// Returns the JSON value, if this is a JSON response.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Consumes the response and returns the JSON value, if any.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw bytes, if this is a raw response.
    #[must_use]
    pub const fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Json(_) => None,
            Self::Raw(bytes) => Some(bytes),
        }
    }

    /// Returns `true` for raw (non-JSON) responses.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// Deserializes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the payload does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self {
            Self::Json(value) => T::deserialize(value),
            Self::Raw(bytes) => serde_json::from_slice(bytes),
        }
    }

    /// Writes the payload to `path`.
    ///
    /// Raw bodies are written unchanged; JSON is written serialized.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be written.
    pub async fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ApiError> {
        let contents = match self {
            Self::Json(value) => Bytes::from(serde_json::to_vec(value)?),
            Self::Raw(bytes) => bytes.clone(),
        };
        tokio::fs::write(path, contents).await?;
        Ok(())
    }
}

/// Unwraps the response envelope.
///
/// - object with a truthy `error`: [`ApiResponseError`]
/// - any other object: its non-null `response` field, or the whole object
/// - array: returned as JSON
/// - scalar, empty or non-JSON body: returned raw
///
/// # Errors
///
/// Returns [`ApiResponseError`] when the body carries an error envelope.
pub fn normalize(status: u16, body: Bytes) -> Result<ApiResponse, ApiResponseError> {
    let Ok(parsed) = serde_json::from_slice::<Value>(&body) else {
        return Ok(ApiResponse::Raw(body));
    };

    match parsed {
        Value::Object(mut map) => {
            if map.get("error").is_some_and(is_truthy) {
                return Err(ApiResponseError::from_body(status, Value::Object(map)));
            }
            if map.get("response").is_some_and(|r| !r.is_null()) {
                if let Some(response) = map.remove("response") {
                    return Ok(ApiResponse::Json(response));
                }
            }
            Ok(ApiResponse::Json(Value::Object(map)))
        }
        Value::Array(items) => Ok(ApiResponse::Json(Value::Array(items))),
        _ => Ok(ApiResponse::Raw(body)),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
