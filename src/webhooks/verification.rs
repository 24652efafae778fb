//! Push notification signature verification.
//!
//! Shopee signs each push with the partner key: the `Authorization` header
//! carries the lowercase hex HMAC-SHA256 of `<callback url>|<raw body>`.
//!
//! # Example
//!
//! ```rust
//! use shopee_api::webhooks::verify_signature;
//! use shopee_api::auth::signing::compute_signature;
//!
//! let url = "https://example.com/shopee/push";
//! let body: &[u8] = br#"{"code":3}"#;
//! let signature = compute_signature(
//!     [url.as_bytes(), "|".as_bytes(), body].concat(),
//!     "partner-key",
//! );
//!
//! assert!(verify_signature(url, body, &signature, "partner-key"));
//! assert!(!verify_signature(url, body, "invalid", "partner-key"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::signing::{compute_signature, constant_time_compare};
use crate::config::ShopeeConfig;
use crate::webhooks::WebhookError;

/// HTTP header carrying the push signature.
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// ============================================================================
// PushRequest
// ============================================================================

/// An inbound push notification as received by the callback endpoint.
///
/// The body is kept as raw bytes; the signature covers the exact payload.
///
/// # Example
///
/// ```rust
/// use shopee_api::webhooks::PushRequest;
///
/// let request = PushRequest::new(
///     "https://example.com/shopee/push",
///     b"{}".to_vec(),
///     "signature",
/// );
///
/// assert_eq!(request.body(), b"{}");
/// assert_eq!(request.authorization(), "signature");
/// ```
#[derive(Debug, Clone)]
pub struct PushRequest {
    url: String,
    body: Vec<u8>,
    authorization: String,
}

impl PushRequest {
    /// Creates a push request from the full callback URL, the raw body and
    /// the `Authorization` header value.
    #[must_use]
    pub fn new(url: impl Into<String>, body: Vec<u8>, authorization: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body,
            authorization: authorization.into(),
        }
    }

    /// Returns the callback URL the push was delivered to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the raw request body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

// ============================================================================
// PushMessage
// ============================================================================

/// A verified push notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    /// The shop the event concerns. Absent for partner-level pushes.
    #[serde(default)]
    pub shop_id: Option<u64>,

    /// The push type code (e.g. 3 for order status updates).
    pub code: i64,

    /// When Shopee emitted the push.
    #[serde(default)]
    pub timestamp: i64,

    /// The event payload.
    #[serde(default)]
    pub data: Value,
}

// ============================================================================
// Verification Functions
// ============================================================================

/// Checks a push signature against `url|raw_body` keyed by `partner_key`.
///
/// The comparison is constant-time.
#[must_use]
pub fn verify_signature(url: &str, raw_body: &[u8], signature: &str, partner_key: &str) -> bool {
    let message = [url.as_bytes(), "|".as_bytes(), raw_body].concat();
    let computed = compute_signature(message, partner_key);
    constant_time_compare(&computed, signature)
}

/// Returns whether `request` carries a valid signature for `config`.
#[must_use]
pub fn is_valid_push_request(config: &ShopeeConfig, request: &PushRequest) -> bool {
    verify_signature(
        request.url(),
        request.body(),
        request.authorization(),
        config.partner_key().as_ref(),
    )
}

/// Checks the signature of `request` without looking at the body shape.
///
/// Use this for pushes whose payload is not a [`PushMessage`]; the raw body
/// is left to the caller.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSignature`] if the signature does not match.
pub fn check_push_signature(
    config: &ShopeeConfig,
    request: &PushRequest,
) -> Result<(), WebhookError> {
    if is_valid_push_request(config, request) {
        Ok(())
    } else {
        tracing::warn!(url = request.url(), "Rejected push notification with invalid signature");
        Err(WebhookError::InvalidSignature)
    }
}

/// Verifies `request` and parses its body.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSignature`] if the signature does not
/// match, or [`WebhookError::InvalidPayload`] if the body is not a push
/// message.
///
/// # Example
///
/// ```rust
/// use shopee_api::webhooks::{verify_push_request, PushRequest, WebhookError};
/// use shopee_api::{PartnerId, PartnerKey, ShopeeConfig};
///
/// let config = ShopeeConfig::builder()
///     .partner_id(PartnerId::new(1))
///     .partner_key(PartnerKey::new("partner-key").unwrap())
///     .build()
///     .unwrap();
///
/// let request = PushRequest::new("https://example.com/push", b"{}".to_vec(), "forged");
/// assert!(matches!(
///     verify_push_request(&config, &request),
///     Err(WebhookError::InvalidSignature)
/// ));
/// ```
pub fn verify_push_request(
    config: &ShopeeConfig,
    request: &PushRequest,
) -> Result<PushMessage, WebhookError> {
    check_push_signature(config, request)?;

    let message: PushMessage = serde_json::from_slice(request.body())?;
    tracing::debug!(code = message.code, shop_id = ?message.shop_id, "Verified push notification");
    Ok(message)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PushRequest>();
    assert_send_sync::<PushMessage>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PartnerId, PartnerKey};

    const URL: &str = "https://example.com/shopee/push";
    const BODY: &str = r#"{"shop_id":600000,"code":3,"timestamp":1700000000,"data":{"ordersn":"2311150001","status":"READY_TO_SHIP"}}"#;
    const SIGNATURE: &str = "f916ea16247bb7119caf09e56c651e4b1316fd2ccf23431d73976f8454a9d4c5";

    fn create_test_config() -> ShopeeConfig {
        ShopeeConfig::builder()
            .partner_id(PartnerId::new(123_456))
            .partner_key(PartnerKey::new("test_partner_key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_verify_signature_known_value() {
        assert!(verify_signature(URL, BODY.as_bytes(), SIGNATURE, "test_partner_key"));
    }

    #[test]
    fn test_verify_signature_wrong_key() {
        assert!(!verify_signature(URL, BODY.as_bytes(), SIGNATURE, "other_key"));
    }

    #[test]
    fn test_verify_signature_wrong_url() {
        assert!(!verify_signature(
            "https://example.com/other",
            BODY.as_bytes(),
            SIGNATURE,
            "test_partner_key"
        ));
    }

    #[test]
    fn test_single_byte_mutation_fails() {
        let mut body = BODY.as_bytes().to_vec();
        body[10] ^= 0x01;
        assert!(!verify_signature(URL, &body, SIGNATURE, "test_partner_key"));
    }

    #[test]
    fn test_uppercase_signature_is_rejected() {
        let upper = SIGNATURE.to_uppercase();
        assert!(!verify_signature(URL, BODY.as_bytes(), &upper, "test_partner_key"));
    }

    #[test]
    fn test_verify_push_request_parses_message() {
        let request = PushRequest::new(URL, BODY.as_bytes().to_vec(), SIGNATURE);
        let message = verify_push_request(&create_test_config(), &request).unwrap();

        assert_eq!(message.shop_id, Some(600_000));
        assert_eq!(message.code, 3);
        assert_eq!(message.timestamp, 1_700_000_000);
        assert_eq!(message.data["status"], "READY_TO_SHIP");
    }

    #[test]
    fn test_is_valid_push_request_bool_mode() {
        let config = create_test_config();
        let good = PushRequest::new(URL, BODY.as_bytes().to_vec(), SIGNATURE);
        let bad = PushRequest::new(URL, BODY.as_bytes().to_vec(), "deadbeef");

        assert!(is_valid_push_request(&config, &good));
        assert!(!is_valid_push_request(&config, &bad));
    }

    #[test]
    fn test_check_push_signature_ignores_body_shape() {
        let config = create_test_config();
        let body = br#"[{"event":"custom"}]"#.to_vec();
        let signature = compute_signature(
            [URL.as_bytes(), "|".as_bytes(), body.as_slice()].concat(),
            "test_partner_key",
        );

        let good = PushRequest::new(URL, body.clone(), signature);
        assert!(check_push_signature(&config, &good).is_ok());
        assert!(matches!(
            verify_push_request(&config, &good),
            Err(WebhookError::InvalidPayload { .. })
        ));

        let forged = PushRequest::new(URL, body, "deadbeef");
        assert!(matches!(
            check_push_signature(&config, &forged),
            Err(WebhookError::InvalidSignature)
        ));
    }

    #[test]
    fn test_valid_signature_with_bad_payload() {
        let body = b"not json".to_vec();
        let signature = compute_signature(
            [URL.as_bytes(), "|".as_bytes(), body.as_slice()].concat(),
            "test_partner_key",
        );
        let request = PushRequest::new(URL, body, signature);

        let result = verify_push_request(&create_test_config(), &request);
        assert!(matches!(result, Err(WebhookError::InvalidPayload { .. })));
    }
}
