use serde_json::{json, Value};

use crate::resources::{id_array, merge_defaults, params, ApiResult, IdList, Params};

resource! {
    /// Shop-defined categories (`shop_category/*`).
    ShopCategory => "shop_category"
}

impl ShopCategory<'_> {
    /// Creates a category.
    pub async fn add_shop_category(&self, name: &str, sort_weight: Option<i64>) -> ApiResult {
        self.post(
            "add_shop_category",
            Value::Object(params(json!({ "name": name, "sort_weight": sort_weight }))),
        )
        .await
    }

    /// Lists categories. Defaults: `page_no=1`, `page_size=100`.
    pub async fn get_shop_category_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(json!({ "page_no": 1, "page_size": 100 }), params);
        self.get("get_shop_category_list", params).await
    }

    /// Deletes a category.
    pub async fn delete_shop_category(&self, shop_category_id: u64) -> ApiResult {
        self.post(
            "delete_shop_category",
            json!({ "shop_category_id": shop_category_id }),
        )
        .await
    }

    /// Updates a category. `status` defaults to `NORMAL`.
    pub async fn update_shop_category(
        &self,
        shop_category_id: u64,
        name: Option<&str>,
        sort_weight: Option<i64>,
        status: Option<&str>,
    ) -> ApiResult {
        self.post(
            "update_shop_category",
            Value::Object(params(json!({
                "shop_category_id": shop_category_id,
                "name": name,
                "sort_weight": sort_weight,
                "status": status.unwrap_or("NORMAL"),
            }))),
        )
        .await
    }

    /// Adds items to a category.
    pub async fn add_item_list(&self, shop_category_id: u64, item_list: impl IdList) -> ApiResult {
        self.post(
            "add_item_list",
            json!({ "shop_category_id": shop_category_id, "item_list": id_array(item_list) }),
        )
        .await
    }

    /// Lists the items of a category. Defaults: `page_no=1`, `page_size=100`.
    pub async fn get_item_list(&self, shop_category_id: u64, params: Params) -> ApiResult {
        let mut params = merge_defaults(json!({ "page_no": 1, "page_size": 100 }), params);
        params.insert("shop_category_id".to_string(), Value::from(shop_category_id));
        self.get("get_item_list", params).await
    }

    /// Removes items from a category.
    pub async fn delete_item_list(&self, shop_category_id: u64, item_list: impl IdList) -> ApiResult {
        self.post(
            "delete_item_list",
            json!({ "shop_category_id": shop_category_id, "item_list": id_array(item_list) }),
        )
        .await
    }
}
