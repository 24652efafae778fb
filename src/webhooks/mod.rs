//! Inbound push notification (webhook) verification.
//!
//! Shopee delivers push notifications to the callback URL configured with
//! [`Push::set_app_push_config`](crate::resources::Push::set_app_push_config).
//! Each delivery is signed with the partner key; verify it before trusting
//! the payload.
//!
//! Three modes are offered:
//!
//! - [`is_valid_push_request`]: returns `bool`
//! - [`check_push_signature`]: returns `Err(WebhookError::InvalidSignature)`
//!   on mismatch and leaves the body alone
//! - [`verify_push_request`]: returns the parsed [`PushMessage`] or a
//!   [`WebhookError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::webhooks::{verify_push_request, PushRequest};
//!
//! let request = PushRequest::new(
//!     "https://myapp.example.com/shopee/push",
//!     raw_body,
//!     authorization_header,
//! );
//!
//! match verify_push_request(client.config(), &request) {
//!     Ok(message) => handle(message.code, message.data),
//!     Err(error) => tracing::warn!(%error, "dropping push"),
//! }
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    check_push_signature, is_valid_push_request, verify_push_request, verify_signature,
    PushMessage, PushRequest, HEADER_AUTHORIZATION,
};
