use serde_json::{json, Value};

use crate::resources::{merge_defaults, params, ApiResult, Params};

resource! {
    /// Add-on deals (`add_on_deal/*`).
    AddOnDeal => "add_on_deal"
}

impl AddOnDeal<'_> {
    /// Creates an add-on deal.
    pub async fn add_add_on_deal(&self, data: Value) -> ApiResult {
        self.post("add_add_on_deal", data).await
    }

    /// Adds main items to an add-on deal.
    pub async fn add_add_on_deal_main_item(
        &self,
        add_on_deal_id: u64,
        main_item_list: Value,
    ) -> ApiResult {
        self.post(
            "add_add_on_deal_main_item",
            json!({ "add_on_deal_id": add_on_deal_id, "main_item_list": main_item_list }),
        )
        .await
    }

    /// Adds sub items to an add-on deal.
    pub async fn add_add_on_deal_sub_item(
        &self,
        add_on_deal_id: u64,
        sub_item_list: Value,
    ) -> ApiResult {
        self.post(
            "add_add_on_deal_sub_item",
            json!({ "add_on_deal_id": add_on_deal_id, "sub_item_list": sub_item_list }),
        )
        .await
    }

    /// Deletes an upcoming add-on deal.
    pub async fn delete_add_on_deal(&self, add_on_deal_id: u64) -> ApiResult {
        self.post(
            "delete_add_on_deal",
            json!({ "add_on_deal_id": add_on_deal_id }),
        )
        .await
    }

    /// Removes main items from an add-on deal.
    pub async fn delete_add_on_deal_main_item(
        &self,
        add_on_deal_id: u64,
        main_item_list: Value,
    ) -> ApiResult {
        self.post(
            "delete_add_on_deal_main_item",
            json!({ "add_on_deal_id": add_on_deal_id, "main_item_list": main_item_list }),
        )
        .await
    }

    /// Removes sub items from an add-on deal.
    pub async fn delete_add_on_deal_sub_item(
        &self,
        add_on_deal_id: u64,
        sub_item_list: Value,
    ) -> ApiResult {
        self.post(
            "delete_add_on_deal_sub_item",
            json!({ "add_on_deal_id": add_on_deal_id, "sub_item_list": sub_item_list }),
        )
        .await
    }

    /// Lists add-on deals.
    /// Defaults: `page_no=1`, `page_size=100`, `promotion_status=all`.
    pub async fn get_add_on_deal_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(
            json!({ "page_no": 1, "page_size": 100, "promotion_status": "all" }),
            params,
        );
        self.get("get_add_on_deal_list", params).await
    }

    /// Fetches an add-on deal.
    pub async fn get_add_on_deal(&self, add_on_deal_id: u64) -> ApiResult {
        self.get(
            "get_add_on_deal",
            params(json!({ "add_on_deal_id": add_on_deal_id })),
        )
        .await
    }

    /// Lists the main items of an add-on deal.
    pub async fn get_add_on_deal_main_item(&self, add_on_deal_id: u64) -> ApiResult {
        self.get(
            "get_add_on_deal_main_item",
            params(json!({ "add_on_deal_id": add_on_deal_id })),
        )
        .await
    }

    /// Lists the sub items of an add-on deal.
    pub async fn get_add_on_deal_sub_item(&self, add_on_deal_id: u64) -> ApiResult {
        self.get(
            "get_add_on_deal_sub_item",
            params(json!({ "add_on_deal_id": add_on_deal_id })),
        )
        .await
    }

    /// Updates an add-on deal.
    pub async fn update_add_on_deal(&self, add_on_deal_id: u64, mut data: Params) -> ApiResult {
        data.insert("add_on_deal_id".to_string(), Value::from(add_on_deal_id));
        self.post("update_add_on_deal", Value::Object(data)).await
    }

    /// Updates main items of an add-on deal.
    pub async fn update_add_on_deal_main_item(
        &self,
        add_on_deal_id: u64,
        main_item_list: Value,
    ) -> ApiResult {
        self.post(
            "update_add_on_deal_main_item",
            json!({ "add_on_deal_id": add_on_deal_id, "main_item_list": main_item_list }),
        )
        .await
    }

    /// Updates sub items of an add-on deal.
    pub async fn update_add_on_deal_sub_item(
        &self,
        add_on_deal_id: u64,
        sub_item_list: Value,
    ) -> ApiResult {
        self.post(
            "update_add_on_deal_sub_item",
            json!({ "add_on_deal_id": add_on_deal_id, "sub_item_list": sub_item_list }),
        )
        .await
    }

    /// Ends an ongoing add-on deal.
    pub async fn end_add_on_deal(&self, add_on_deal_id: u64) -> ApiResult {
        self.post("end_add_on_deal", json!({ "add_on_deal_id": add_on_deal_id }))
            .await
    }
}
