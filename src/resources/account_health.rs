use crate::resources::{ApiResult, Params};

resource! {
    /// Shop performance metrics (`account_health/*`).
    AccountHealth => "account_health"
}

impl AccountHealth<'_> {
    /// Fetches shop performance metrics.
    pub async fn shop_performance(&self) -> ApiResult {
        self.get("shop_performance", Params::new()).await
    }

    /// Fetches the shop's penalty points and ongoing punishments.
    pub async fn shop_penalty(&self) -> ApiResult {
        self.get("shop_penalty", Params::new()).await
    }
}
