//! Authentication types for the Shopee API SDK.
//!
//! # Overview
//!
//! - [`signing`]: The partner HMAC-SHA256 request signature
//! - [`Session`]: The shop id and access token injected into requests
//! - [`AccessTokenResponse`]: The payload of the token endpoints
//! - [`Auth`]: Authorization URL and token exchange helpers
//!
//! # Example
//!
//! ```rust
//! use shopee_api::Session;
//!
//! let session = Session::new(600_000, "access-token")
//!     .with_refresh_token("refresh-token");
//!
//! // Sessions without an expiry never report as expired
//! assert!(!session.expired());
//! ```

mod authorization;
mod session;
pub mod signing;

pub use authorization::Auth;
pub use session::{AccessTokenResponse, Session};
