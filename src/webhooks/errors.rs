//! Push notification error types for the Shopee API SDK.
//!
//! # Example
//!
//! ```rust
//! use shopee_api::webhooks::WebhookError;
//!
//! let error = WebhookError::InvalidSignature;
//! assert_eq!(error.to_string(), "Push notification signature verification failed");
//! ```

use thiserror::Error;

/// Errors returned when verifying an inbound push notification.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The `Authorization` header does not match the computed signature.
    #[error("Push notification signature verification failed")]
    InvalidSignature,

    /// The signature matched but the body is not a push message.
    #[error("Invalid push notification payload: {source}")]
    InvalidPayload {
        /// The decoding failure.
        #[from]
        source: serde_json::Error,
    },
}

// Verify WebhookError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebhookError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_signature_message() {
        let error = WebhookError::InvalidSignature;
        assert!(error.to_string().contains("signature"));
    }

    #[test]
    fn test_invalid_payload_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = WebhookError::from(source);

        assert!(matches!(error, WebhookError::InvalidPayload { .. }));
        assert!(error.to_string().starts_with("Invalid push notification payload"));
    }
}
