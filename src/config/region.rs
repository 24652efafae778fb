//! Regional endpoint selection.
//!
//! Shopee hosts the v2 Open Platform API on three regional origins, each with
//! a sandbox ("test-stable") twin used when debug mode is enabled.

use std::fmt;
use std::str::FromStr;

/// Base URL for the global (default) region.
pub const DEFAULT_BASE_URL: &str = "https://partner.shopeemobile.com/api/v2/";
/// Sandbox base URL for the global (default) region.
pub const DEFAULT_SANDBOX_BASE_URL: &str = "https://partner.test-stable.shopeemobile.com/api/v2/";
/// Base URL for the Chinese mainland region.
pub const CHINA_BASE_URL: &str = "https://openplatform.shopee.cn/api/v2/";
/// Sandbox base URL for the Chinese mainland region.
pub const CHINA_SANDBOX_BASE_URL: &str = "https://openplatform.test-stable.shopee.cn/api/v2/";
/// Base URL for the Brazil region.
pub const BRAZIL_BASE_URL: &str = "https://openplatform.shopee.com.br/api/v2/";
/// Sandbox base URL for the Brazil region.
pub const BRAZIL_SANDBOX_BASE_URL: &str = "https://openplatform.test-stable.shopee.com.br/api/v2/";

/// The deployment region the client talks to.
///
/// A single enum makes China and Brazil mutually exclusive: choosing one
/// replaces whatever was chosen before.
///
/// # Example
///
/// ```rust
/// use shopee_api::Region;
///
/// assert_eq!(Region::China.base_url(false), "https://openplatform.shopee.cn/api/v2/");
/// assert_eq!("brazil".parse::<Region>().unwrap(), Region::Brazil);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    /// Global endpoint (`partner.shopeemobile.com`).
    #[default]
    Default,
    /// Chinese mainland endpoint (`openplatform.shopee.cn`).
    China,
    /// Brazil endpoint (`openplatform.shopee.com.br`).
    Brazil,
}

impl Region {
    /// Returns the base URL for this region, picking the sandbox host when
    /// `debug` is set.
    #[must_use]
    pub const fn base_url(self, debug: bool) -> &'static str {
        match (self, debug) {
            (Self::Default, false) => DEFAULT_BASE_URL,
            (Self::Default, true) => DEFAULT_SANDBOX_BASE_URL,
            (Self::China, false) => CHINA_BASE_URL,
            (Self::China, true) => CHINA_SANDBOX_BASE_URL,
            (Self::Brazil, false) => BRAZIL_BASE_URL,
            (Self::Brazil, true) => BRAZIL_SANDBOX_BASE_URL,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::China => f.write_str("china"),
            Self::Brazil => f.write_str("brazil"),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "global" => Ok(Self::Default),
            "china" | "cn" => Ok(Self::China),
            "brazil" | "br" => Ok(Self::Brazil),
            other => Err(format!("unknown region '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_table_is_exhaustive() {
        let cases = [
            (Region::Default, false, "https://partner.shopeemobile.com/api/v2/"),
            (Region::Default, true, "https://partner.test-stable.shopeemobile.com/api/v2/"),
            (Region::China, false, "https://openplatform.shopee.cn/api/v2/"),
            (Region::China, true, "https://openplatform.test-stable.shopee.cn/api/v2/"),
            (Region::Brazil, false, "https://openplatform.shopee.com.br/api/v2/"),
            (Region::Brazil, true, "https://openplatform.test-stable.shopee.com.br/api/v2/"),
        ];

        for (region, debug, expected) in cases {
            assert_eq!(region.base_url(debug), expected, "{region} debug={debug}");
        }
    }

    #[test]
    fn test_default_region() {
        assert_eq!(Region::default(), Region::Default);
    }

    #[test]
    fn test_region_parsing() {
        assert_eq!("China".parse::<Region>().unwrap(), Region::China);
        assert_eq!("br".parse::<Region>().unwrap(), Region::Brazil);
        assert_eq!("global".parse::<Region>().unwrap(), Region::Default);
        assert!("mars".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_display_round_trips() {
        for region in [Region::Default, Region::China, Region::Brazil] {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }
}
