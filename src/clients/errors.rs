//! Error types for dispatched API calls.
//!
//! This module contains error types for request dispatch, including
//! upstream error envelopes, request validation failures and transport
//! errors.
//!
//! # Error Handling
//!
//! - [`ApiResponseError`]: An error envelope returned by the Open Platform
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`ApiError`]: Unified error type encompassing all dispatch errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::ApiError;
//!
//! match client.shop().get_shop_info().await {
//!     Ok(info) => println!("Shop: {info:?}"),
//!     Err(ApiError::Authorization(e)) => {
//!         println!("Re-authorize: {}", e.message);
//!     }
//!     Err(ApiError::Response(e)) => {
//!         println!("API error {}: {}", e.error, e.message);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// The error code Shopee uses for authorization failures.
pub const AUTH_ERROR_CODE: &str = "error_auth";

/// An error envelope returned by the Open Platform.
///
/// Shopee signals failures in the body (`{"error": "...", "message": "..."}`),
/// often with a 2xx status. The full body is kept for callers that need
/// fields beyond `error` and `message`.
///
/// # Example
///
/// ```rust
/// use shopee_api::clients::ApiResponseError;
///
/// let body = serde_json::json!({"error": "error_param", "message": "bad id"});
/// let error = ApiResponseError::from_body(400, body);
///
/// assert_eq!(error.error, "error_param");
/// assert_eq!(error.to_string(), "error_param: bad id");
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{error}: {message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The upstream error code (e.g. `error_auth`, `error_param`).
    pub error: String,
    /// The upstream error message.
    pub message: String,
    /// The upstream request id, if present.
    pub request_id: Option<String>,
    /// The complete response body.
    pub body: serde_json::Value,
}

impl ApiResponseError {
    /// Extracts the envelope fields from a response body.
    #[must_use]
    pub fn from_body(status: u16, body: serde_json::Value) -> Self {
        let field = |name: &str| match body.get(name) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let error = field("error");
        let message = field("message");
        let request_id = body
            .get("request_id")
            .and_then(serde_json::Value::as_str)
            .map(String::from);

        Self {
            status,
            error,
            message,
            request_id,
            body,
        }
    }

    /// Returns `true` if this is an authorization failure.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        self.error == AUTH_ERROR_CODE
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path could not be resolved against the base URL.
    #[error("Cannot resolve path '{path}' against the API base URL.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// A multipart body was attached to a GET request.
    #[error("Cannot send a multipart body with {method}.")]
    MultipartNotAllowed {
        /// The HTTP method used.
        method: String,
    },
}

/// Unified error type for all dispatch errors.
///
/// # Example
///
/// ```rust,ignore
/// use shopee_api::ApiError;
///
/// match result {
///     Ok(value) => { /* handle success */ }
///     Err(ApiError::Authorization(e)) => { /* token expired or revoked */ }
///     Err(ApiError::Response(e)) => { /* other upstream error */ }
///     Err(ApiError::Network(e)) => { /* transport failure */ }
///     Err(e) => { /* local failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream rejected the credentials (`error_auth`).
    #[error("Authorization failed: {0}")]
    Authorization(ApiResponseError),

    /// The upstream returned any other error envelope.
    #[error("API error: {0}")]
    Response(ApiResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Reading an upload or writing a download failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A success payload did not have the expected shape.
    #[error("Unexpected response payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the upstream envelope if this error came from one.
    #[must_use]
    pub const fn response_error(&self) -> Option<&ApiResponseError> {
        match self {
            Self::Authorization(e) | Self::Response(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiResponseError> for ApiError {
    fn from(error: ApiResponseError) -> Self {
        if error.is_auth_error() {
            Self::Authorization(error)
        } else {
            Self::Response(error)
        }
    }
}
