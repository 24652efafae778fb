use serde_json::{json, Value};

use crate::resources::{merge_defaults, ApiResult, Params};

resource! {
    /// Shop vouchers (`voucher/*`).
    Voucher => "voucher"
}

impl Voucher<'_> {
    /// Creates a voucher.
    pub async fn add_voucher(&self, data: Value) -> ApiResult {
        self.post("add_voucher", data).await
    }

    /// Deletes an upcoming voucher.
    pub async fn delete_voucher(&self, voucher_id: u64) -> ApiResult {
        self.post("delete_voucher", json!({ "voucher_id": voucher_id }))
            .await
    }

    /// Ends an ongoing voucher.
    pub async fn end_voucher(&self, voucher_id: u64) -> ApiResult {
        self.post("end_voucher", json!({ "voucher_id": voucher_id }))
            .await
    }

    /// Updates a voucher.
    pub async fn update_voucher(&self, voucher_id: u64, mut data: Params) -> ApiResult {
        data.insert("voucher_id".to_string(), Value::from(voucher_id));
        self.post("update_voucher", Value::Object(data)).await
    }

    /// Fetches a voucher.
    pub async fn get_voucher(&self, voucher_id: u64) -> ApiResult {
        self.post("get_voucher", json!({ "voucher_id": voucher_id }))
            .await
    }

    /// Lists vouchers. Defaults: `page_no=1`, `page_size=100`, `status=all`.
    pub async fn get_voucher_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(
            json!({ "page_size": 100, "page_no": 1, "status": "all" }),
            params,
        );
        self.get("get_voucher_list", params).await
    }
}
