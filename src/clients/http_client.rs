//! HTTP client for Shopee Open Platform communication.
//!
//! This module provides the [`HttpClient`] type: it owns the partner
//! credentials and the current shop session, signs every request and
//! normalizes the response envelope.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use serde_json::{Map, Value};

use crate::auth::signing::{sign_query, SignedQuery};
use crate::auth::Session;
use crate::clients::errors::{ApiError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartBody};
use crate::clients::http_response::{normalize, ApiResponse};
use crate::config::ShopeeConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making signed requests to the Shopee API.
///
/// The client handles:
/// - Base URL selection from region, debug mode or `api_host`
/// - Injection of `partner_id` and the session `access_token`/`shop_id`
/// - Request signing
/// - Envelope normalization into [`ApiResponse`] or [`ApiError`]
///
/// Non-2xx statuses are not treated as failures by themselves; the body
/// decides. There is no retry logic.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The session sits behind a lock and is
/// copied out before any request is awaited.
///
/// # Example
///
/// ```rust,ignore
/// use shopee_api::{ShopeeConfig, PartnerId, PartnerKey, Session};
/// use shopee_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = ShopeeConfig::builder()
///     .partner_id(PartnerId::new(123_456))
///     .partner_key(PartnerKey::new("partner-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(config);
/// client.set_session(Session::new(600_000, "access-token"));
///
/// let request = HttpRequest::builder(HttpMethod::Get, "shop/get_shop_info")
///     .build()
///     .unwrap();
///
/// let info = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Partner credentials and endpoint selection.
    config: ShopeeConfig,
    /// The shop context injected into requests.
    session: RwLock<Option<Session>>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: ShopeeConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopee API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            session: RwLock::new(None),
            default_headers,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ShopeeConfig {
        &self.config
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a copy of the current session, if one is set.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sets the shop session used for subsequent requests.
    pub fn set_session(&self, session: Session) {
        tracing::debug!(shop_id = session.shop_id, "Shopee session set");
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Clears the shop session.
    pub fn clear_session(&self) {
        tracing::debug!("Shopee session cleared");
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Stamps and signs `params` for the absolute URL `path`, using the
    /// configured partner credentials and clock.
    #[must_use]
    pub fn sign(&self, path: &str, params: BTreeMap<String, String>) -> SignedQuery {
        sign_query(
            self.config.partner_id(),
            self.config.partner_key(),
            path,
            params,
            self.config.time_source().now(),
        )
    }

    /// Resolves a relative API path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPath`] if the join fails.
    pub fn endpoint_url(&self, path: &str) -> Result<reqwest::Url, InvalidHttpRequestError> {
        reqwest::Url::parse(self.base_url())
            .and_then(|base| base.join(path))
            .map_err(|_| InvalidHttpRequestError::InvalidPath {
                path: path.to_string(),
            })
    }

    /// Sends a request to the Shopee API.
    ///
    /// The path may carry a leading `/api/v2/`, which is stripped. The
    /// request is signed against the final URL path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The body carries an `error_auth` envelope (`Authorization`)
    /// - The body carries any other error envelope (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        request.verify()?;

        let mut url = self.endpoint_url(request.relative_path())?;

        let mut query = request.query;
        query.insert(
            "partner_id".to_string(),
            self.config.partner_id().to_string(),
        );
        if let Some(session) = self.session() {
            if !session.access_token.is_empty() {
                query.insert("access_token".to_string(), session.access_token);
            }
            if session.shop_id != 0 {
                query.insert("shop_id".to_string(), session.shop_id.to_string());
            }
        }

        let signed = self.sign(url.path(), query);
        url.query_pairs_mut().clear().extend_pairs(signed.iter());

        tracing::debug!(
            method = %request.http_method,
            path = url.path(),
            "Dispatching Shopee API request"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(multipart) = request.multipart {
            req_builder = req_builder.multipart(multipart.into_form());
        } else if request.http_method == HttpMethod::Post {
            let body = request
                .body
                .unwrap_or_else(|| Value::Object(Map::new()));
            req_builder = req_builder.json(&body);
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?;

        normalize(status, body).map_err(|error| {
            tracing::warn!(
                path = url.path(),
                status,
                error = %error.error,
                message = %error.message,
                "Shopee API returned an error"
            );
            ApiError::from(error)
        })
    }

    /// Sends a GET request with `params` in the query string.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        path: &str,
        params: &Map<String, Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(params)
            .build()?;
        self.request(request).await
    }

    /// Sends a POST request with `body` as JSON.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()?;
        self.request(request).await
    }

    /// Sends a multipart POST request, with optional extra query params.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn upload(
        &self,
        path: &str,
        multipart: MultipartBody,
        query: &Map<String, Value>,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = HttpRequest::builder(HttpMethod::Post, path)
            .query(query)
            .build()?;
        request.multipart = Some(multipart);
        self.request(request).await
    }
}
