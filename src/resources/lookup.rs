//! Name-based resource lookup.

use std::fmt;
use std::str::FromStr;

use crate::clients::HttpClient;
use crate::resources::errors::ResourceError;
use crate::resources::{
    AccountHealth, AddOnDeal, Ads, Authorization, BundleDeal, Chat, Discount, FirstMile,
    FollowPrize, Logistic, MediaSpace, Merchant, Order, Payment, Product, Push, Returns, Shop,
    ShopCategory, ShopFlashSale, TopPicks, Voucher,
};

macro_rules! resource_names {
    ($($variant:ident),* $(,)?) => {
        /// The name of a resource group.
        ///
        /// Parsing accepts the PascalCase name (`ShopCategory`) as well as the
        /// snake_case path prefix spelling (`shop_category`), case-insensitively.
        ///
        /// # Example
        ///
        /// ```rust
        /// use shopee_api::resources::ResourceName;
        ///
        /// assert_eq!("Order".parse::<ResourceName>().unwrap(), ResourceName::Order);
        /// assert_eq!("first_mile".parse::<ResourceName>().unwrap(), ResourceName::FirstMile);
        /// assert!("Nope".parse::<ResourceName>().is_err());
        /// ```
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ResourceName {
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl ResourceName {
            /// Every known resource group.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the PascalCase name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }

        /// A resource handle chosen at runtime.
        #[derive(Clone, Copy, Debug)]
        pub enum AnyResource<'a> {
            $(
                #[allow(missing_docs)]
                $variant($variant<'a>),
            )*
        }

        impl<'a> AnyResource<'a> {
            /// Creates the handle for `name`.
            #[must_use]
            pub const fn new(name: ResourceName, client: &'a HttpClient) -> Self {
                match name {
                    $(ResourceName::$variant => Self::$variant($variant::new(client)),)*
                }
            }

            /// Returns the group name.
            #[must_use]
            pub const fn name(&self) -> ResourceName {
                match self {
                    $(Self::$variant(_) => ResourceName::$variant,)*
                }
            }

            /// Returns the path prefix of the group.
            #[must_use]
            pub const fn prefix(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $variant::PREFIX,)*
                }
            }
        }
    };
}

resource_names!(
    Ads,
    Authorization,
    AccountHealth,
    Chat,
    Logistic,
    Order,
    Payment,
    Product,
    Shop,
    FirstMile,
    Discount,
    BundleDeal,
    AddOnDeal,
    Voucher,
    FollowPrize,
    TopPicks,
    ShopCategory,
    Returns,
    MediaSpace,
    Merchant,
    Push,
    ShopFlashSale,
);

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceName {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ResourceError::UnknownResource {
                name: s.to_string(),
            })
    }
}
