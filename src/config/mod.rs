//! Configuration types for the Shopee API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Shopee Open Platform.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShopeeConfig`]: The main configuration struct holding all SDK settings
//! - [`ShopeeConfigBuilder`]: A builder for constructing [`ShopeeConfig`] instances
//! - [`PartnerId`]: A validated partner id newtype
//! - [`PartnerKey`]: A validated partner key newtype with masked debug output
//! - [`Region`]: The regional endpoint to talk to
//! - [`TimeSource`]: The clock used to timestamp signed requests
//!
//! # Example
//!
//! ```rust
//! use shopee_api::{ShopeeConfig, PartnerId, PartnerKey};
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(123_456))
//!     .partner_key(PartnerKey::new("my-partner-key").unwrap())
//!     .debug_mode(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://partner.test-stable.shopeemobile.com/api/v2/");
//! ```

mod newtypes;
mod region;

pub use newtypes::{PartnerId, PartnerKey};
pub use region::Region;

use crate::error::ConfigError;
use std::fmt;
use std::sync::Arc;

/// The clock used to stamp signed requests, in Unix seconds.
///
/// Defaults to the system clock. Tests inject a fixed value so signatures
/// are reproducible.
///
/// # Example
///
/// ```rust
/// use shopee_api::TimeSource;
///
/// let clock = TimeSource::fixed(1_700_000_000);
/// assert_eq!(clock.now(), 1_700_000_000);
/// ```
#[derive(Clone)]
pub struct TimeSource(Arc<dyn Fn() -> i64 + Send + Sync>);

impl TimeSource {
    /// Wraps an arbitrary clock function.
    pub fn new(f: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A clock that always returns `timestamp`.
    #[must_use]
    pub fn fixed(timestamp: i64) -> Self {
        Self::new(move || timestamp)
    }

    /// The system clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(|| chrono::Utc::now().timestamp())
    }

    /// Reads the current time in Unix seconds.
    #[must_use]
    pub fn now(&self) -> i64 {
        (self.0)()
    }
}

impl Default for TimeSource {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for TimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TimeSource")
    }
}

/// Configuration for the Shopee API SDK.
///
/// Holds the partner credentials and endpoint selection. Session values
/// (shop id, access token) are not part of the configuration; they live on
/// the [`Client`](crate::Client) and can be swapped at any time.
///
/// # Thread Safety
///
/// `ShopeeConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use shopee_api::{ShopeeConfig, PartnerId, PartnerKey, Region};
///
/// let config = ShopeeConfig::builder()
///     .partner_id("2001887".parse().unwrap())
///     .partner_key(PartnerKey::new("key").unwrap())
///     .china_region()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.region(), Region::China);
/// ```
#[derive(Clone, Debug)]
pub struct ShopeeConfig {
    partner_id: PartnerId,
    partner_key: PartnerKey,
    region: Region,
    debug_mode: bool,
    api_host: Option<String>,
    user_agent_prefix: Option<String>,
    time_source: TimeSource,
}

impl ShopeeConfig {
    /// Creates a new builder for constructing a `ShopeeConfig`.
    #[must_use]
    pub fn builder() -> ShopeeConfigBuilder {
        ShopeeConfigBuilder::new()
    }

    /// Returns the partner id.
    #[must_use]
    pub const fn partner_id(&self) -> PartnerId {
        self.partner_id
    }

    /// Returns the partner key.
    #[must_use]
    pub const fn partner_key(&self) -> &PartnerKey {
        &self.partner_key
    }

    /// Returns the selected region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns whether requests go to the sandbox hosts.
    #[must_use]
    pub const fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub fn api_host(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the clock used for request timestamps.
    #[must_use]
    pub const fn time_source(&self) -> &TimeSource {
        &self.time_source
    }

    /// Returns the base URL every API path is resolved against.
    ///
    /// The `api_host` override wins; otherwise the region/debug table picks
    /// the host. The result always ends with `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_host
            .as_deref()
            .unwrap_or_else(|| self.region.base_url(self.debug_mode))
    }
}

// Verify ShopeeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopeeConfig>();
};

/// Builder for constructing [`ShopeeConfig`] instances.
///
/// Required fields are `partner_id` and `partner_key`.
///
/// # Defaults
///
/// - `region`: [`Region::Default`]
/// - `debug_mode`: `false`
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
/// - `time_source`: system clock
#[derive(Debug, Default)]
pub struct ShopeeConfigBuilder {
    partner_id: Option<PartnerId>,
    partner_key: Option<PartnerKey>,
    region: Option<Region>,
    debug_mode: Option<bool>,
    api_host: Option<String>,
    user_agent_prefix: Option<String>,
    time_source: Option<TimeSource>,
}

impl ShopeeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the partner id (required).
    #[must_use]
    pub const fn partner_id(mut self, id: PartnerId) -> Self {
        self.partner_id = Some(id);
        self
    }

    /// Sets the partner key (required).
    #[must_use]
    pub fn partner_key(mut self, key: PartnerKey) -> Self {
        self.partner_key = Some(key);
        self
    }

    /// Switches to the sandbox ("test-stable") hosts.
    #[must_use]
    pub const fn debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = Some(debug);
        self
    }

    /// Selects the region explicitly.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Targets the Chinese mainland endpoint. Replaces any earlier region.
    #[must_use]
    pub const fn china_region(self) -> Self {
        self.region(Region::China)
    }

    /// Targets the Brazil endpoint. Replaces any earlier region.
    #[must_use]
    pub const fn brazil_region(self) -> Self {
        self.region(Region::Brazil)
    }

    /// Overrides the base URL entirely (proxies, mock servers).
    ///
    /// The value must be an absolute URL; a trailing `/` is added if missing.
    #[must_use]
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the clock used for request timestamps.
    #[must_use]
    pub fn time_source(mut self, clock: TimeSource) -> Self {
        self.time_source = Some(clock);
        self
    }

    /// Builds the [`ShopeeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `partner_id` or
    /// `partner_key` are not set, and [`ConfigError::InvalidApiHost`] if the
    /// host override is not an absolute URL.
    pub fn build(self) -> Result<ShopeeConfig, ConfigError> {
        let partner_id = self
            .partner_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "partner_id",
            })?;
        let partner_key = self
            .partner_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "partner_key",
            })?;
        let api_host = self.api_host.map(normalize_api_host).transpose()?;

        Ok(ShopeeConfig {
            partner_id,
            partner_key,
            region: self.region.unwrap_or_default(),
            debug_mode: self.debug_mode.unwrap_or(false),
            api_host,
            user_agent_prefix: self.user_agent_prefix,
            time_source: self.time_source.unwrap_or_default(),
        })
    }
}

fn normalize_api_host(host: String) -> Result<String, ConfigError> {
    let url = reqwest::Url::parse(&host).map_err(|_| ConfigError::InvalidApiHost {
        url: host.clone(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidApiHost { url: host });
    }

    let mut normalized = url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
