use serde_json::{json, Value};

use crate::resources::{merge_defaults, params, ApiResult, Params};

resource! {
    /// Shop discounts (`discount/*`).
    Discount => "discount"
}

impl Discount<'_> {
    /// Creates a discount.
    pub async fn add_discount(&self, data: Value) -> ApiResult {
        self.post("add_discount", data).await
    }

    /// Adds items to a discount.
    pub async fn add_discount_item(&self, discount_id: u64, item_list: Value) -> ApiResult {
        self.post(
            "add_discount_item",
            json!({ "discount_id": discount_id, "item_list": item_list }),
        )
        .await
    }

    /// Deletes an upcoming discount.
    pub async fn delete_discount(&self, discount_id: u64) -> ApiResult {
        self.post("delete_discount", json!({ "discount_id": discount_id }))
            .await
    }

    /// Removes an item (or one of its models) from a discount.
    pub async fn delete_discount_item(
        &self,
        discount_id: u64,
        item_id: u64,
        model_id: Option<u64>,
    ) -> ApiResult {
        self.post(
            "delete_discount_item",
            Value::Object(params(json!({
                "discount_id": discount_id,
                "item_id": item_id,
                "model_id": model_id,
            }))),
        )
        .await
    }

    /// Fetches a discount with its items. Defaults: `page_no=1`, `page_size=50`.
    pub async fn get_discount(&self, discount_id: u64, params: Params) -> ApiResult {
        let mut params = merge_defaults(json!({ "page_no": 1, "page_size": 50 }), params);
        params.insert("discount_id".to_string(), Value::from(discount_id));
        self.get("get_discount", params).await
    }

    /// Lists discounts.
    /// Defaults: `discount_status=all`, `page_no=1`, `page_size=50`.
    pub async fn get_discount_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(
            json!({ "discount_status": "all", "page_no": 1, "page_size": 50 }),
            params,
        );
        self.get("get_discount_list", params).await
    }

    /// Updates a discount.
    pub async fn update_discount(&self, discount_id: u64, mut data: Params) -> ApiResult {
        data.insert("discount_id".to_string(), Value::from(discount_id));
        self.post("update_discount", Value::Object(data)).await
    }

    /// Updates items of a discount.
    pub async fn update_discount_item(&self, discount_id: u64, item_list: Value) -> ApiResult {
        self.post(
            "update_discount_item",
            json!({ "discount_id": discount_id, "item_list": item_list }),
        )
        .await
    }

    /// Ends an ongoing discount.
    pub async fn end_discount(&self, discount_id: u64) -> ApiResult {
        self.post("end_discount", json!({ "discount_id": discount_id }))
            .await
    }
}
