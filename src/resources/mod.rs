//! Shopee Open Platform API groups.
//!
//! Each group ("resource") is a thin handle borrowing the
//! [`HttpClient`](crate::clients::HttpClient). Its methods shape their
//! arguments into a path plus query, JSON or multipart payload, forward the
//! call to the dispatcher and return its result unchanged.
//!
//! Every group exposes a `PREFIX` constant; an endpoint path is
//! `PREFIX/action` (e.g. `order/get_order_list`).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::resources::params;
//! use serde_json::json;
//!
//! let orders = client.order().get_order_list(params(json!({
//!     "order_status": "READY_TO_SHIP",
//! }))).await?;
//!
//! // Lookup by name
//! let resource = client.resource("ShopCategory")?;
//! assert_eq!(resource.prefix(), "shop_category");
//! ```

use crate::clients::HttpClient;

/// Declares a resource handle with its `PREFIX` and dispatch helpers.
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident => $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<'a> {
            client: &'a $crate::clients::HttpClient,
        }

        impl<'a> $name<'a> {
            /// Path prefix shared by every endpoint of this group.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a handle that dispatches through `client`.
            #[must_use]
            pub const fn new(client: &'a $crate::clients::HttpClient) -> Self {
                Self { client }
            }

            fn path(action: &str) -> String {
                format!("{}/{}", Self::PREFIX, action)
            }

            #[allow(dead_code)]
            async fn get(
                &self,
                action: &str,
                params: $crate::resources::Params,
            ) -> $crate::resources::ApiResult {
                self.client.get(&Self::path(action), &params).await
            }

            #[allow(dead_code)]
            async fn post(
                &self,
                action: &str,
                body: serde_json::Value,
            ) -> $crate::resources::ApiResult {
                self.client.post(&Self::path(action), body).await
            }
        }
    };
}

mod account_health;
mod add_on_deal;
mod ads;
mod authorization;
mod bundle_deal;
mod chat;
mod discount;
mod errors;
mod first_mile;
mod follow_prize;
mod logistic;
mod lookup;
mod media_space;
mod merchant;
mod order;
mod params;
mod payment;
mod product;
mod push;
mod returns;
mod shop;
mod shop_category;
mod shop_flash_sale;
mod top_picks;
mod upload;
mod voucher;

pub use account_health::AccountHealth;
pub use add_on_deal::AddOnDeal;
pub use ads::Ads;
pub use authorization::Authorization;
pub use bundle_deal::BundleDeal;
pub use chat::Chat;
pub use discount::Discount;
pub use errors::ResourceError;
pub use first_mile::FirstMile;
pub use follow_prize::FollowPrize;
pub use logistic::Logistic;
pub use lookup::{AnyResource, ResourceName};
pub use media_space::MediaSpace;
pub use merchant::Merchant;
pub use order::Order;
pub use params::{id_array, join_ids, merge_defaults, params, ApiResult, IdList, Params};
pub use payment::Payment;
pub use product::Product;
pub use push::Push;
pub use returns::Returns;
pub use shop::Shop;
pub use shop_category::ShopCategory;
pub use shop_flash_sale::ShopFlashSale;
pub use top_picks::TopPicks;
pub use upload::UploadFile;
pub use voucher::Voucher;

/// Looks up a resource group by name on `client`.
///
/// # Errors
///
/// Returns [`ResourceError::UnknownResource`] if `name` is not a known group.
pub fn resource<'a>(client: &'a HttpClient, name: &str) -> Result<AnyResource<'a>, ResourceError> {
    let name: ResourceName = name.parse()?;
    Ok(AnyResource::new(name, client))
}
