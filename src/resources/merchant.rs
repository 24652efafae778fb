use serde_json::{json, Value};

use crate::resources::{merge_defaults, params, ApiResult, Params};

resource! {
    /// Merchant (multi-shop seller) queries (`merchant/*`).
    Merchant => "merchant"
}

/// Fills in a cursor with `page_size=10` when the caller gave none.
fn cursor_with_defaults(cursor: Option<Value>) -> Value {
    let overrides = cursor.map(params).unwrap_or_default();
    Value::Object(merge_defaults(json!({ "page_size": 10 }), overrides))
}

impl Merchant<'_> {
    /// Fetches merchant information.
    pub async fn get_merchant_info(&self) -> ApiResult {
        self.get("get_merchant_info", Params::new()).await
    }

    /// Lists shops of the merchant. Defaults: `page_no=1`, `page_size=100`.
    pub async fn get_shop_list_by_merchant(&self, params: Params) -> ApiResult {
        let params = merge_defaults(json!({ "page_no": 1, "page_size": 100 }), params);
        self.get("get_shop_list_by_merchant", params).await
    }

    /// Lists warehouse locations of the merchant.
    pub async fn get_merchant_warehouse_location_list(&self) -> ApiResult {
        self.get("get_merchant_warehouse_location_list", Params::new())
            .await
    }

    /// Lists warehouses of the merchant.
    pub async fn get_merchant_warehouse_list(
        &self,
        cursor: Option<Value>,
        warehouse_type: Option<i64>,
    ) -> ApiResult {
        self.post(
            "get_merchant_warehouse_list",
            Value::Object(params(json!({
                "cursor": cursor_with_defaults(cursor),
                "warehouse_type": warehouse_type,
            }))),
        )
        .await
    }

    /// Lists shops eligible to use a warehouse.
    pub async fn get_warehouse_eligible_shop_list(
        &self,
        warehouse_id: u64,
        warehouse_type: i64,
        cursor: Option<Value>,
    ) -> ApiResult {
        self.post(
            "get_warehouse_eligible_shop_list",
            json!({
                "warehouse_id": warehouse_id,
                "warehouse_type": warehouse_type,
                "cursor": cursor_with_defaults(cursor),
            }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_defaults_page_size() {
        assert_eq!(cursor_with_defaults(None), json!({ "page_size": 10 }));
        assert_eq!(
            cursor_with_defaults(Some(json!({ "next_id": 5 }))),
            json!({ "page_size": 10, "next_id": 5 })
        );
        assert_eq!(
            cursor_with_defaults(Some(json!({ "page_size": 30 }))),
            json!({ "page_size": 30 })
        );
    }
}
