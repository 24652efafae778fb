use serde_json::json;

use crate::resources::{params, ApiResult, Params};

resource! {
    /// Shopee Ads (`ads/*`).
    Ads => "ads"
}

impl Ads<'_> {
    /// Fetches the remaining ads credit.
    pub async fn get_total_balance(&self) -> ApiResult {
        self.get("get_total_balance", Params::new()).await
    }

    /// Fetches the shop-level auto top-up and campaign toggles.
    pub async fn get_shop_toggle_info(&self) -> ApiResult {
        self.get("get_shop_toggle_info", Params::new()).await
    }

    /// Lists recommended keywords for an item.
    pub async fn get_recommended_keyword_list(
        &self,
        item_id: u64,
        input_keyword: Option<&str>,
    ) -> ApiResult {
        self.get(
            "get_recommended_keyword_list",
            params(json!({ "item_id": item_id, "input_keyword": input_keyword })),
        )
        .await
    }

    /// Lists items recommended for advertising.
    pub async fn get_recommended_item_list(&self) -> ApiResult {
        self.get("get_recommended_item_list", Params::new()).await
    }

    /// Fetches hourly CPC ads performance for one day (`DD-MM-YYYY`).
    pub async fn get_all_cpc_ads_hourly_performance(&self, performance_date: &str) -> ApiResult {
        self.get(
            "get_all_cpc_ads_hourly_performance",
            params(json!({ "performance_date": performance_date })),
        )
        .await
    }

    /// Fetches daily CPC ads performance for a date range (`DD-MM-YYYY`).
    pub async fn get_all_cpc_ads_daily_performance(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult {
        self.get(
            "get_all_cpc_ads_daily_performance",
            params(json!({ "start_date": start_date, "end_date": end_date })),
        )
        .await
    }
}
