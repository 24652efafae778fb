use serde_json::{json, Value};

use crate::resources::{id_array, merge_defaults, params, ApiResult, IdList, Params};

resource! {
    /// Shop flash sales (`shop_flash_sale/*`).
    ShopFlashSale => "shop_flash_sale"
}

impl ShopFlashSale<'_> {
    /// Lists available time slots between two Unix timestamps.
    pub async fn get_time_slot_id(&self, start_time: i64, end_time: i64) -> ApiResult {
        self.get(
            "get_time_slot_id",
            params(json!({ "start_time": start_time, "end_time": end_time })),
        )
        .await
    }

    /// Creates a flash sale in a time slot.
    pub async fn create_shop_flash_sale(&self, timeslot_id: u64) -> ApiResult {
        self.post(
            "create_shop_flash_sale",
            json!({ "timeslot_id": timeslot_id }),
        )
        .await
    }

    /// Fetches the criteria items must meet to join a flash sale.
    pub async fn get_item_criteria(&self) -> ApiResult {
        self.get("get_item_criteria", Params::new()).await
    }

    /// Adds items to a flash sale.
    pub async fn add_shop_flash_sale_items(&self, flash_sale_id: u64, items: Value) -> ApiResult {
        self.post(
            "add_shop_flash_sale_items",
            json!({ "flash_sale_id": flash_sale_id, "items": items }),
        )
        .await
    }

    /// Lists flash sales. Defaults: `type=0`, `offset=0`, `limit=10`.
    pub async fn get_shop_flash_sale_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(json!({ "type": 0, "offset": 0, "limit": 10 }), params);
        self.get("get_shop_flash_sale_list", params).await
    }

    /// Fetches a flash sale.
    pub async fn get_shop_flash_sale(&self, flash_sale_id: u64) -> ApiResult {
        self.get(
            "get_shop_flash_sale",
            params(json!({ "flash_sale_id": flash_sale_id })),
        )
        .await
    }

    /// Lists the items of a flash sale.
    pub async fn get_shop_flash_sale_items(
        &self,
        flash_sale_id: u64,
        offset: u32,
        limit: u32,
    ) -> ApiResult {
        self.get(
            "get_shop_flash_sale_items",
            params(json!({ "flash_sale_id": flash_sale_id, "offset": offset, "limit": limit })),
        )
        .await
    }

    /// Enables or disables a flash sale.
    pub async fn update_shop_flash_sale(&self, flash_sale_id: u64, status: i64) -> ApiResult {
        self.post(
            "update_shop_flash_sale",
            json!({ "flash_sale_id": flash_sale_id, "status": status }),
        )
        .await
    }

    /// Updates items of a flash sale.
    pub async fn update_shop_flash_sale_items(&self, flash_sale_id: u64, items: Value) -> ApiResult {
        self.post(
            "update_shop_flash_sale_items",
            json!({ "flash_sale_id": flash_sale_id, "items": items }),
        )
        .await
    }

    /// Deletes a flash sale.
    pub async fn delete_shop_flash_sale(&self, flash_sale_id: u64) -> ApiResult {
        self.post(
            "delete_shop_flash_sale",
            json!({ "flash_sale_id": flash_sale_id }),
        )
        .await
    }

    /// Removes items from a flash sale.
    pub async fn delete_shop_flash_sale_items(
        &self,
        flash_sale_id: u64,
        item_ids: impl IdList,
    ) -> ApiResult {
        self.post(
            "delete_shop_flash_sale_items",
            json!({ "flash_sale_id": flash_sale_id, "item_ids": id_array(item_ids) }),
        )
        .await
    }
}
