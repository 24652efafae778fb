//! HTTP client types for Shopee Open Platform communication.
//!
//! This module provides the signing dispatcher every resource call goes
//! through.
//!
//! # Overview
//!
//! - [`HttpClient`]: Signs, sends and normalizes requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`ApiResponse`]: A normalized success payload (JSON or raw bytes)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`ApiError`]: Everything that can go wrong during dispatch
//!
//! # Envelope handling
//!
//! HTTP status codes are not interpreted. The body decides:
//!
//! - `{"error": "error_auth", ...}` becomes [`ApiError::Authorization`]
//! - any other truthy `error` becomes [`ApiError::Response`]
//! - otherwise the `response` field (or the whole body) is returned
//! - non-JSON bodies (document downloads) come back as [`ApiResponse::Raw`]

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, ApiResponseError, InvalidHttpRequestError, AUTH_ERROR_CODE};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    query_value, FilePart, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartBody,
};
pub use http_response::{normalize, ApiResponse};
