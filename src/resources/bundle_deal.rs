use serde_json::{json, Value};

use crate::resources::{merge_defaults, params, ApiResult, Params};

resource! {
    /// Bundle deals (`bundle_deal/*`).
    BundleDeal => "bundle_deal"
}

impl BundleDeal<'_> {
    /// Creates a bundle deal.
    pub async fn add_bundle_deal(&self, data: Value) -> ApiResult {
        self.post("add_bundle_deal", data).await
    }

    /// Adds items to a bundle deal.
    pub async fn add_bundle_deal_item(&self, bundle_deal_id: u64, item_list: Value) -> ApiResult {
        self.post(
            "add_bundle_deal_item",
            json!({ "bundle_deal_id": bundle_deal_id, "item_list": item_list }),
        )
        .await
    }

    /// Lists bundle deals. Defaults: `page_no=1`, `page_size=100`, `time_status=1`.
    pub async fn get_bundle_deal_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(
            json!({ "page_no": 1, "page_size": 100, "time_status": 1 }),
            params,
        );
        self.get("get_bundle_deal_list", params).await
    }

    /// Fetches a bundle deal.
    pub async fn get_bundle_deal(&self, bundle_deal_id: u64) -> ApiResult {
        self.get(
            "get_bundle_deal",
            params(json!({ "bundle_deal_id": bundle_deal_id })),
        )
        .await
    }

    /// Lists the items of a bundle deal.
    pub async fn get_bundle_deal_item(&self, bundle_deal_id: u64) -> ApiResult {
        self.get(
            "get_bundle_deal_item",
            params(json!({ "bundle_deal_id": bundle_deal_id })),
        )
        .await
    }

    /// Updates a bundle deal.
    pub async fn update_bundle_deal(&self, bundle_deal_id: u64, mut data: Params) -> ApiResult {
        data.insert("bundle_deal_id".to_string(), Value::from(bundle_deal_id));
        self.post("update_bundle_deal", Value::Object(data)).await
    }

    /// Updates items of a bundle deal.
    pub async fn update_bundle_deal_item(&self, bundle_deal_id: u64, item_list: Value) -> ApiResult {
        self.post(
            "update_bundle_deal_item",
            json!({ "bundle_deal_id": bundle_deal_id, "item_list": item_list }),
        )
        .await
    }

    /// Ends an ongoing bundle deal.
    pub async fn end_bundle_deal(&self, bundle_deal_id: u64) -> ApiResult {
        self.post("end_bundle_deal", json!({ "bundle_deal_id": bundle_deal_id }))
            .await
    }

    /// Deletes an upcoming bundle deal.
    pub async fn delete_bundle_deal(&self, bundle_deal_id: u64) -> ApiResult {
        self.post(
            "delete_bundle_deal",
            json!({ "bundle_deal_id": bundle_deal_id }),
        )
        .await
    }

    /// Removes items from a bundle deal.
    pub async fn delete_bundle_deal_item(&self, bundle_deal_id: u64, item_list: Value) -> ApiResult {
        self.post(
            "delete_bundle_deal_item",
            json!({ "bundle_deal_id": bundle_deal_id, "item_list": item_list }),
        )
        .await
    }
}
