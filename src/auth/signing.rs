//! Request signing for Shopee Open Platform calls.
//!
//! Every outbound call carries a `sign` query parameter: the lowercase hex
//! HMAC-SHA256 of `partner_id + path + timestamp + access_token + shop_id`
//! (no delimiters), keyed by the partner key.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use shopee_api::auth::signing::sign_query;
//! use shopee_api::{PartnerId, PartnerKey};
//!
//! let key = PartnerKey::new("test_partner_key").unwrap();
//! let signed = sign_query(
//!     PartnerId::new(123_456),
//!     &key,
//!     "/api/v2/shop/get_shop_info",
//!     BTreeMap::new(),
//!     1_700_000_000,
//! );
//!
//! assert_eq!(
//!     signed.sign(),
//!     "8d210783de694d241511d4b314db209d432ce66faefe85fc0f9f79c8dd872998"
//! );
//! assert_eq!(signed.get("access_token"), Some(""));
//! ```

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::{PartnerId, PartnerKey};

type HmacSha256 = Hmac<Sha256>;

/// Paths whose signature excludes the session values.
///
/// Token exchange happens before a shop token exists, so `access_token` and
/// `shop_id` are stripped from the query before signing.
pub const TOKEN_PATHS: [&str; 2] = ["/api/v2/auth/token/get", "/api/v2/auth/access_token/get"];

/// Computes an HMAC-SHA256 signature for the given message.
///
/// The signature is returned as a lowercase hexadecimal string.
///
/// # Example
///
/// ```rust
/// use shopee_api::auth::signing::compute_signature;
///
/// let sig = compute_signature("test-message", "secret-key");
/// assert_eq!(sig.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: impl AsRef<[u8]>, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_ref());
    hex::encode(mac.finalize().into_bytes())
}

/// Performs constant-time comparison of two strings.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// A query map that has been stamped and signed.
///
/// Always contains `timestamp`, `access_token`, `shop_id` and `sign`, even
/// when the session values are empty. Keys are ordered, so the rendered
/// query string is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignedQuery {
    params: BTreeMap<String, String>,
}

impl SignedQuery {
    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the computed signature.
    #[must_use]
    pub fn sign(&self) -> &str {
        self.get("sign").unwrap_or_default()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the parameters as a percent-encoded query string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Consumes the query and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.params
    }
}

/// Stamps and signs a query map for `path`.
///
/// `path` is the absolute URL path of the request (for example
/// `/api/v2/shop/get_shop_info`). `timestamp`, `access_token` and `shop_id`
/// are defaulted only when absent; caller-supplied values are kept and
/// signed as given. On [`TOKEN_PATHS`] the session values are removed first.
#[must_use]
pub fn sign_query(
    partner_id: PartnerId,
    partner_key: &PartnerKey,
    path: &str,
    mut params: BTreeMap<String, String>,
    timestamp: i64,
) -> SignedQuery {
    if TOKEN_PATHS.contains(&path) {
        params.remove("access_token");
        params.remove("shop_id");
    }

    params
        .entry("timestamp".to_string())
        .or_insert_with(|| timestamp.to_string());
    params.entry("access_token".to_string()).or_default();
    params.entry("shop_id".to_string()).or_default();

    let base_string = format!(
        "{partner_id}{path}{}{}{}",
        params["timestamp"], params["access_token"], params["shop_id"]
    );
    let sign = compute_signature(base_string, partner_key.as_ref());
    params.insert("sign".to_string(), sign);

    SignedQuery { params }
}
