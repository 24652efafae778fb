//! # Shopee API Rust SDK
//!
//! A Rust SDK for the Shopee Open Platform API (v2), providing type-safe
//! configuration, request signing and one method per endpoint for every
//! supported API group.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShopeeConfig`] and [`ShopeeConfigBuilder`]
//! - Validated newtypes for partner credentials
//! - Regional endpoint selection (global, China, Brazil) with sandbox support
//! - HMAC-SHA256 request signing via [`auth::signing`]
//! - Shop authorization and token exchange via [`auth::Auth`]
//! - Response envelope normalization into [`ApiResponse`] or [`ApiError`]
//! - 22 resource groups under [`resources`]
//! - Push notification verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopee_api::{Client, PartnerId, PartnerKey, ShopeeConfig};
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(123_456))
//!     .partner_key(PartnerKey::new("your-partner-key").unwrap())
//!     .debug_mode(true)
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(config);
//! assert!(client.session().is_none());
//! ```
//!
//! ## Shop Authorization
//!
//! ```rust,ignore
//! // Step 1: Send the seller to the authorization page
//! let url = client.auth().authorization_url("https://myapp.example.com/callback")?;
//!
//! // Step 2: Shopee redirects back with ?code=...&shop_id=...
//! let session = client.auth().get_token(&code, shop_id).await?;
//!
//! // Step 3: Persist the session and install it
//! client.set_session(session);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopee_api::resources::{params, Params};
//! use serde_json::json;
//!
//! let info = client.shop().get_shop_info().await?;
//!
//! let orders = client
//!     .order()
//!     .get_order_list(params(json!({ "order_status": "READY_TO_SHIP" })))
//!     .await?;
//!
//! let detail = client
//!     .order()
//!     .get_order_detail(["2311150001", "2311150002"], Params::new())
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use shopee_api::ApiError;
//!
//! match client.shop().get_shop_info().await {
//!     Ok(info) => println!("{:?}", info.as_json()),
//!     Err(ApiError::Authorization(e)) => println!("re-authorize: {}", e.message),
//!     Err(ApiError::Response(e)) => println!("{}: {}", e.error, e.message),
//!     Err(e) => println!("transport failure: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Each call is exactly one HTTP request

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use auth::{AccessTokenResponse, Auth, Session};
pub use client::Client;
pub use config::{PartnerId, PartnerKey, Region, ShopeeConfig, ShopeeConfigBuilder, TimeSource};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiResponse, ApiResponseError, HttpClient, HttpMethod, HttpRequest,
    InvalidHttpRequestError,
};

// Re-export resource lookup types
pub use resources::{ResourceError, ResourceName, UploadFile};

// Re-export webhook types
pub use webhooks::{PushMessage, PushRequest, WebhookError};
