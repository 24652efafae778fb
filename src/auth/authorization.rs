//! Shop authorization flow.
//!
//! Shopee's partner authorization works in three steps:
//!
//! 1. Redirect the seller to [`Auth::authorization_url`].
//! 2. Shopee redirects back with `code` and `shop_id` query parameters.
//! 3. Exchange them with [`Auth::get_token`] and install the returned
//!    [`Session`] with `Client::set_session`.
//!
//! Access tokens are short-lived; [`Auth::refresh_access_token`] trades the
//! refresh token for a new pair. Nothing here touches the client's current
//! session.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::auth::session::{AccessTokenResponse, Session};
use crate::clients::{ApiError, HttpClient};
use crate::resources::Authorization;

/// Path of the seller-facing authorization page, relative to the API base.
const AUTH_PARTNER_PATH: &str = "shop/auth_partner";

/// Authorization helpers bound to a client.
///
/// # Example
///
/// ```rust,ignore
/// use shopee_api::Client;
///
/// // Step 1: send the seller here
/// let url = client.auth().authorization_url("https://myapp.example.com/callback")?;
///
/// // Step 3: in the callback handler
/// let session = client.auth().get_token(&code, shop_id).await?;
/// client.set_session(session);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Auth<'a> {
    client: &'a HttpClient,
}

impl<'a> Auth<'a> {
    /// Creates helpers that use `client`'s configuration.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Builds the signed URL the seller visits to authorize the partner app.
    ///
    /// The query carries `partner_id`, `redirect`, `timestamp`, empty
    /// `access_token` and `shop_id` placeholders, and `sign`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the base URL cannot be joined.
    pub fn authorization_url(&self, redirect: &str) -> Result<String, ApiError> {
        let url = self.client.endpoint_url(AUTH_PARTNER_PATH)?;

        let mut params = BTreeMap::new();
        params.insert(
            "partner_id".to_string(),
            self.client.config().partner_id().to_string(),
        );
        params.insert("redirect".to_string(), redirect.to_string());

        let signed = self.client.sign(url.path(), params);
        Ok(format!("{url}?{}", signed.to_query_string()))
    }

    /// Exchanges an authorization code for a [`Session`].
    ///
    /// # Errors
    ///
    /// Returns any dispatch error, or [`ApiError::Json`] if the token
    /// payload cannot be decoded.
    pub async fn get_token(&self, code: &str, shop_id: u64) -> Result<Session, ApiError> {
        let response = Authorization::new(self.client)
            .get_token(code, shop_id)
            .await?;
        let token: AccessTokenResponse = response.deserialize()?;
        tracing::debug!(shop_id, "Obtained Shopee access token");
        Ok(token.into_session(shop_id, self.issued_at()))
    }

    /// Exchanges a refresh token for a new [`Session`].
    ///
    /// # Errors
    ///
    /// Same as [`get_token`](Self::get_token).
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
        shop_id: u64,
    ) -> Result<Session, ApiError> {
        let response = Authorization::new(self.client)
            .refresh_new_token(refresh_token, shop_id)
            .await?;
        let token: AccessTokenResponse = response.deserialize()?;
        tracing::debug!(shop_id, "Refreshed Shopee access token");
        Ok(token.into_session(shop_id, self.issued_at()))
    }

    fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.client.config().time_source().now(), 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}
