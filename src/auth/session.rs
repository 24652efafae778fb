//! Session management for Shopee API authentication.
//!
//! This module provides the [`Session`] type holding the per-shop values
//! injected into signed requests, and [`AccessTokenResponse`], the payload
//! returned by the token endpoints.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The shop context used for authenticated API calls.
///
/// The dispatcher injects `access_token` and `shop_id` into every request
/// while a session is set. `refresh_token` and `expires` are informational:
/// the SDK never refreshes tokens on its own.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use shopee_api::Session;
///
/// let session = Session::new(600_000, "access-token");
///
/// assert!(session.is_active());
/// assert!(!session.expired());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The shop this session acts on.
    pub shop_id: u64,

    /// The access token for API authentication.
    pub access_token: String,

    /// Token used to obtain a fresh access token, if known.
    pub refresh_token: Option<String>,

    /// When the access token expires, if known.
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a new session without refresh information.
    #[must_use]
    pub fn new(shop_id: u64, access_token: impl Into<String>) -> Self {
        Self {
            shop_id,
            access_token: access_token.into(),
            refresh_token: None,
            expires: None,
        }
    }

    /// Attaches a refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Attaches an expiry time.
    #[must_use]
    pub const fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session is active (not expired and has access token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

/// Response body of `auth/token/get` and `auth/access_token/get`.
///
/// Token endpoints reply without a `response` wrapper, so these fields sit
/// at the top level of the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// The new access token.
    pub access_token: String,
    /// The refresh token to use next time.
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expire_in: i64,
    /// Upstream request id.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Shops covered by a main-account authorization.
    #[serde(default)]
    pub shop_id_list: Vec<u64>,
    /// Merchants covered by a main-account authorization.
    #[serde(default)]
    pub merchant_id_list: Vec<u64>,
}

impl AccessTokenResponse {
    /// Builds a [`Session`] for `shop_id`, with expiry counted from `issued_at`.
    #[must_use]
    pub fn into_session(self, shop_id: u64, issued_at: DateTime<Utc>) -> Session {
        Session {
            shop_id,
            access_token: self.access_token,
            refresh_token: Some(self.refresh_token),
            expires: Some(issued_at + Duration::seconds(self.expire_in)),
        }
    }
}
