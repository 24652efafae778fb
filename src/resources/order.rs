use serde_json::{json, Value};

use crate::resources::{join_ids, merge_defaults, ApiResult, IdList, Params};

const SEVEN_DAYS: i64 = 7 * 24 * 60 * 60;

resource! {
    /// Order queries (`order/*`).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let detail = client
    ///     .order()
    ///     .get_order_detail(["2311150001", "2311150002"], Params::new())
    ///     .await?;
    /// ```
    Order => "order"
}

impl Order<'_> {
    /// Lists orders.
    ///
    /// Defaults: `time_range_field=create_time`, the last seven days and
    /// `page_size=20`. Any of these can be overridden through `params`.
    pub async fn get_order_list(&self, params: Params) -> ApiResult {
        let now = self.client.config().time_source().now();
        let params = merge_defaults(
            json!({
                "time_range_field": "create_time",
                "time_from": now - SEVEN_DAYS,
                "time_to": now,
                "page_size": 20,
            }),
            params,
        );
        self.get("get_order_list", params).await
    }

    /// Lists orders waiting to ship. `page_size` is always 20.
    pub async fn get_shipment_list(&self, mut params: Params) -> ApiResult {
        params.insert("page_size".to_string(), Value::from(20));
        self.get("get_shipment_list", params).await
    }

    /// Fetches order details for one or more order numbers.
    pub async fn get_order_detail(&self, order_sn_list: impl IdList, mut params: Params) -> ApiResult {
        params.insert(
            "order_sn_list".to_string(),
            Value::from(join_ids(order_sn_list)),
        );
        self.get("get_order_detail", params).await
    }

    /// Fetches buyer invoice information for one or more orders.
    pub async fn get_buyer_invoice_info(&self, order_sn_list: impl IdList) -> ApiResult {
        let queries: Vec<Value> = order_sn_list
            .into_id_list()
            .into_iter()
            .map(|order_sn| json!({ "order_sn": order_sn }))
            .collect();
        self.post("get_buyer_invoice_info", json!({ "queries": queries }))
            .await
    }
}
