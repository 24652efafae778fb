//! The SDK entry point.

use std::sync::Arc;

use crate::auth::{Auth, Session};
use crate::clients::HttpClient;
use crate::config::ShopeeConfig;
use crate::resources::{
    self, AccountHealth, AddOnDeal, Ads, AnyResource, Authorization, BundleDeal, Chat, Discount,
    FirstMile, FollowPrize, Logistic, MediaSpace, Merchant, Order, Payment, Product, Push,
    ResourceError, Returns, Shop, ShopCategory, ShopFlashSale, TopPicks, Voucher,
};
use crate::webhooks::{self, PushMessage, PushRequest, WebhookError};

/// A Shopee Open Platform client.
///
/// `Client` owns the signing dispatcher behind an [`Arc`]; clones share the
/// same dispatcher and therefore the same session. Resource handles borrow
/// the client and are free to create.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use shopee_api::{Client, PartnerId, PartnerKey, Session, ShopeeConfig};
/// use shopee_api::resources::Params;
///
/// let config = ShopeeConfig::builder()
///     .partner_id(PartnerId::new(123_456))
///     .partner_key(PartnerKey::new("partner-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = Client::new(config);
/// client.set_session(Session::new(600_000, "access-token"));
///
/// let info = client.shop().get_shop_info().await?;
/// let orders = client.order().get_order_list(Params::new()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

macro_rules! resource_accessors {
    ($($(#[$meta:meta])* $method:ident => $ty:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $method(&self) -> $ty<'_> {
                $ty::new(&self.http)
            }
        )*
    };
}

impl Client {
    /// Creates a client for `config`, without a session.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created (see
    /// [`HttpClient::new`]).
    #[must_use]
    pub fn new(config: ShopeeConfig) -> Self {
        Self {
            http: Arc::new(HttpClient::new(config)),
        }
    }

    /// Returns the signing dispatcher.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ShopeeConfig {
        self.http.config()
    }

    /// Sets the shop session used for subsequent requests.
    pub fn set_session(&self, session: Session) {
        self.http.set_session(session);
    }

    /// Clears the shop session.
    pub fn clear_session(&self) {
        self.http.clear_session();
    }

    /// Returns a copy of the current session.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.http.session()
    }

    /// Returns the authorization helpers.
    #[must_use]
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.http)
    }

    /// Looks up a resource group by name (`"Order"`, `"shop_category"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownResource`] for unknown names.
    pub fn resource(&self, name: &str) -> Result<AnyResource<'_>, ResourceError> {
        resources::resource(&self.http, name)
    }

    resource_accessors! {
        /// Shopee Ads.
        ads => Ads,
        /// Token exchange endpoints.
        authorization => Authorization,
        /// Shop performance metrics.
        account_health => AccountHealth,
        /// Seller chat.
        chat => Chat,
        /// Shipping and fulfilment.
        logistic => Logistic,
        /// Orders.
        order => Order,
        /// Escrow, payouts and installments.
        payment => Payment,
        /// Catalogue management.
        product => Product,
        /// Shop profile.
        shop => Shop,
        /// First-mile shipping.
        first_mile => FirstMile,
        /// Discounts.
        discount => Discount,
        /// Bundle deals.
        bundle_deal => BundleDeal,
        /// Add-on deals.
        add_on_deal => AddOnDeal,
        /// Vouchers.
        voucher => Voucher,
        /// Follow prize campaigns.
        follow_prize => FollowPrize,
        /// Top picks collections.
        top_picks => TopPicks,
        /// Shop categories.
        shop_category => ShopCategory,
        /// Returns and refunds.
        returns => Returns,
        /// Image and video uploads.
        media_space => MediaSpace,
        /// Merchant queries.
        merchant => Merchant,
        /// Push configuration.
        push => Push,
        /// Shop flash sales.
        shop_flash_sale => ShopFlashSale,
    }

    /// Returns whether an inbound push carries a valid signature.
    #[must_use]
    pub fn is_valid_push_request(&self, request: &PushRequest) -> bool {
        webhooks::is_valid_push_request(self.config(), request)
    }

    /// Checks the signature of an inbound push without parsing its body.
    ///
    /// # Errors
    ///
    /// See [`webhooks::check_push_signature`].
    pub fn check_push_signature(&self, request: &PushRequest) -> Result<(), WebhookError> {
        webhooks::check_push_signature(self.config(), request)
    }

    /// Verifies an inbound push and parses its body.
    ///
    /// # Errors
    ///
    /// See [`webhooks::verify_push_request`].
    pub fn verify_push_request(&self, request: &PushRequest) -> Result<PushMessage, WebhookError> {
        webhooks::verify_push_request(self.config(), request)
    }
}
