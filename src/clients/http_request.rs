//! HTTP request types for the Shopee API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! describing a call before the dispatcher signs and sends it.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Open Platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET; parameters travel in the query string.
    Get,
    /// HTTP POST; parameters travel in a JSON or multipart body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A file part of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    /// The form field name (e.g. `image`, `file`).
    pub name: String,
    /// The raw file contents.
    pub data: Bytes,
    /// The filename sent in `Content-Disposition`.
    pub filename: String,
}

/// A multipart form body: file parts plus plain text fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartBody {
    /// File parts, in insertion order.
    pub files: Vec<FilePart>,
    /// Text fields, in insertion order.
    pub fields: Vec<(String, String)>,
}

impl MultipartBody {
    pub(crate) fn into_form(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for file in self.files {
            let part = reqwest::multipart::Part::bytes(file.data.to_vec()).file_name(file.filename);
            form = form.part(file.name, part);
        }
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        form
    }
}

/// Renders a JSON value as a query-string value.
///
/// Strings pass through, numbers and booleans use their JSON spelling,
/// arrays are joined with commas and `null` is dropped.
#[must_use]
pub fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// A request to be signed and sent by the dispatcher.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use shopee_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "product/get_category")
///     .query_param("language", "en")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "product/boost_item")
///     .body(json!({"item_id_list": [1, 2]}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API base (e.g. `shop/get_shop_info`).
    pub path: String,
    /// Extra query parameters, merged with the signing parameters.
    pub query: BTreeMap<String, String>,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Multipart body, if any.
    pub multipart: Option<MultipartBody>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MultipartNotAllowed`] if a
    /// multipart body is attached to a GET request.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method == HttpMethod::Get && self.multipart.is_some() {
            return Err(InvalidHttpRequestError::MultipartNotAllowed {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the path with surrounding slashes and the `api/v2/` prefix removed.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        let trimmed = self.path.trim_matches('/');
        trimmed.strip_prefix("api/v2/").unwrap_or(trimmed)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: BTreeMap<String, String>,
    body: Option<Value>,
    multipart: Option<MultipartBody>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
            multipart: None,
        }
    }

    /// Adds every entry of `params` to the query string.
    #[must_use]
    pub fn query(mut self, params: &Map<String, Value>) -> Self {
        for (key, value) in params {
            if let Some(rendered) = query_value(value) {
                self.query.insert(key.clone(), rendered);
            }
        }
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a file part to the multipart body.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        data: impl Into<Bytes>,
        filename: impl Into<String>,
    ) -> Self {
        self.multipart.get_or_insert_with(MultipartBody::default).files.push(FilePart {
            name: name.into(),
            data: data.into(),
            filename: filename.into(),
        });
        self
    }

    /// Adds a text field to the multipart body.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.multipart
            .get_or_insert_with(MultipartBody::default)
            .fields
            .push((name.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if validation fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
            multipart: self.multipart,
        };
        request.verify()?;
        Ok(request)
    }
}
