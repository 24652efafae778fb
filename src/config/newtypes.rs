//! Validated newtype wrappers for partner credentials.
//!
//! Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopee partner id.
///
/// Partner ids are integers issued by the Open Platform console. String
/// input is coerced with [`FromStr`], which rejects anything that is not a
/// positive integer.
///
/// # Example
///
/// ```rust
/// use shopee_api::PartnerId;
///
/// let id: PartnerId = "123456".parse().unwrap();
/// assert_eq!(id.get(), 123_456);
/// assert_eq!(id.to_string(), "123456");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartnerId(u64);

impl PartnerId {
    /// Creates a partner id from an integer.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PartnerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for PartnerId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(|| ConfigError::InvalidPartnerId {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The partner key shared secret.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use shopee_api::PartnerKey;
///
/// let key = PartnerKey::new("my-partner-key").unwrap();
/// assert_eq!(format!("{:?}", key), "PartnerKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PartnerKey(String);

impl PartnerKey {
    /// Creates a new validated partner key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPartnerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPartnerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PartnerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PartnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PartnerKey(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_id_parses_integer_strings() {
        let id: PartnerId = "2001887".parse().unwrap();
        assert_eq!(id, PartnerId::new(2_001_887));

        let id: PartnerId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_partner_id_rejects_non_integers() {
        assert!(matches!(
            "abc".parse::<PartnerId>(),
            Err(ConfigError::InvalidPartnerId { value }) if value == "abc"
        ));
        assert!("".parse::<PartnerId>().is_err());
        assert!("-5".parse::<PartnerId>().is_err());
        assert!("0".parse::<PartnerId>().is_err());
        assert!("12.5".parse::<PartnerId>().is_err());
    }

    #[test]
    fn test_partner_key_rejects_empty_string() {
        assert!(matches!(
            PartnerKey::new(""),
            Err(ConfigError::EmptyPartnerKey)
        ));
    }

    #[test]
    fn test_partner_key_masks_value_in_debug() {
        let key = PartnerKey::new("super-secret-key").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "PartnerKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }
}
