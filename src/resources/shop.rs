use serde_json::{json, Value};

use crate::resources::{merge_defaults, params, ApiResult, Params};

resource! {
    /// Shop profile and settings (`shop/*`).
    Shop => "shop"
}

impl Shop<'_> {
    /// Fetches basic information about the authorized shop.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let info = client.shop().get_shop_info().await?;
    /// println!("{}", info.as_json().unwrap()["shop_name"]);
    /// ```
    pub async fn get_shop_info(&self) -> ApiResult {
        self.get("get_shop_info", Params::new()).await
    }

    /// Fetches the shop profile.
    pub async fn get_profile(&self) -> ApiResult {
        self.get("get_profile", Params::new()).await
    }

    /// Updates the shop profile. Only the given fields change.
    pub async fn update_profile(
        &self,
        shop_name: Option<&str>,
        shop_logo: Option<&str>,
        description: Option<&str>,
    ) -> ApiResult {
        self.post(
            "update_profile",
            Value::Object(params(json!({
                "shop_name": shop_name,
                "shop_logo": shop_logo,
                "description": description,
            }))),
        )
        .await
    }

    /// Fetches warehouse details of the shop.
    pub async fn get_warehouse_detail(&self) -> ApiResult {
        self.get("get_warehouse_detail", Params::new()).await
    }

    /// Lists platform notifications sent to the shop.
    pub async fn get_shop_notification(&self, params: Params) -> ApiResult {
        self.get("get_shop_notification", params).await
    }

    /// Lists brands the shop is an authorised reseller of.
    /// Defaults: `page_no=1`, `page_size=10`.
    pub async fn get_authorised_reseller_brand(&self, params: Params) -> ApiResult {
        let params = merge_defaults(json!({ "page_no": 1, "page_size": 10 }), params);
        self.get("get_authorised_reseller_brand", params).await
    }
}
