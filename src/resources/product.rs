use serde_json::{json, Value};

use crate::resources::{id_array, join_ids, merge_defaults, params, ApiResult, IdList, Params};

resource! {
    /// Catalogue management (`product/*`).
    Product => "product"
}

impl Product<'_> {
    /// Lists the category tree.
    pub async fn get_category(&self, params: Params) -> ApiResult {
        self.get("get_category", params).await
    }

    /// Lists the attributes of a category.
    pub async fn get_attributes(&self, category_id: u64, language: Option<&str>) -> ApiResult {
        self.get(
            "get_attributes",
            params(json!({ "category_id": category_id, "language": language })),
        )
        .await
    }

    /// Fetches the attribute tree of one or more categories.
    pub async fn get_attribute_tree(
        &self,
        category_id_list: impl IdList,
        language: Option<&str>,
    ) -> ApiResult {
        self.get(
            "get_attribute_tree",
            params(json!({
                "category_id_list": join_ids(category_id_list),
                "language": language,
            })),
        )
        .await
    }

    /// Lists brands of a category. Defaults: `offset=0`, `page_size=10`, `status=1`.
    pub async fn get_brand_list(&self, category_id: u64, params: Params) -> ApiResult {
        let mut params = merge_defaults(
            json!({ "offset": 0, "page_size": 10, "status": 1 }),
            params,
        );
        params.insert("category_id".to_string(), Value::from(category_id));
        self.get("get_brand_list", params).await
    }

    /// Lists the models (variants) of an item.
    pub async fn get_model_list(&self, item_id: u64) -> ApiResult {
        self.get("get_model_list", params(json!({ "item_id": item_id })))
            .await
    }

    /// Lists items. Defaults: `offset=0`, `page_size=20`, `item_status=NORMAL`.
    pub async fn get_item_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(
            json!({ "offset": 0, "page_size": 20, "item_status": "NORMAL" }),
            params,
        );
        self.get("get_item_list", params).await
    }

    /// Fetches base information for one or more items.
    pub async fn get_item_base_info(
        &self,
        item_id_list: impl IdList,
        need_tax_info: bool,
        need_complaint_policy: bool,
    ) -> ApiResult {
        self.get(
            "get_item_base_info",
            params(json!({
                "item_id_list": join_ids(item_id_list),
                "need_tax_info": need_tax_info,
                "need_complaint_policy": need_complaint_policy,
            })),
        )
        .await
    }

    /// Boosts one or more items.
    pub async fn boost_item(&self, item_id_list: impl IdList) -> ApiResult {
        self.post("boost_item", json!({ "item_id_list": id_array(item_id_list) }))
            .await
    }

    /// Lists currently boosted items.
    pub async fn get_boosted_list(&self) -> ApiResult {
        self.get("get_boosted_list", Params::new()).await
    }

    /// Lists buyer comments. Defaults: `cursor=""`, `page_size=20`.
    pub async fn get_comment(&self, params: Params) -> ApiResult {
        let params = merge_defaults(json!({ "cursor": "", "page_size": 20 }), params);
        self.get("get_comment", params).await
    }

    /// Replies to a buyer comment.
    pub async fn reply_comment(&self, comment_id: u64, comment: &str) -> ApiResult {
        self.post(
            "reply_comment",
            json!({
                "comment_list": [{ "comment_id": comment_id, "comment": comment }],
            }),
        )
        .await
    }

    /// Creates an item from a complete item payload.
    pub async fn add_item(&self, item: Value) -> ApiResult {
        self.post("add_item", item).await
    }

    /// Updates an item.
    pub async fn update_item(&self, item_id: u64, mut fields: Params) -> ApiResult {
        fields.insert("item_id".to_string(), Value::from(item_id));
        self.post("update_item", Value::Object(fields)).await
    }

    /// Deletes an item.
    pub async fn delete_item(&self, item_id: u64) -> ApiResult {
        self.post("delete_item", json!({ "item_id": item_id })).await
    }

    /// Initializes the tier variation of an item.
    pub async fn init_tier_variation(
        &self,
        item_id: u64,
        tier_variation: Value,
        model: Value,
    ) -> ApiResult {
        self.post(
            "init_tier_variation",
            json!({ "item_id": item_id, "tier_variation": tier_variation, "model": model }),
        )
        .await
    }

    /// Updates the tier variation of an item.
    pub async fn update_tier_variation(
        &self,
        item_id: u64,
        tier_variation: Value,
        model_list: Value,
    ) -> ApiResult {
        self.post(
            "update_tier_variation",
            json!({
                "item_id": item_id,
                "tier_variation": tier_variation,
                "model_list": model_list,
            }),
        )
        .await
    }

    /// Adds models to an item.
    pub async fn add_model(&self, item_id: u64, model_list: Value) -> ApiResult {
        self.post(
            "add_model",
            json!({ "item_id": item_id, "model_list": model_list }),
        )
        .await
    }
}
