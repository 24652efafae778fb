use serde_json::{json, Value};

use crate::resources::{id_array, params, ApiResult, IdList, Params};

resource! {
    /// Escrow, payouts and installments (`payment/*`).
    Payment => "payment"
}

impl Payment<'_> {
    /// Fetches the escrow breakdown of an order.
    pub async fn get_escrow_detail(&self, order_sn: &str) -> ApiResult {
        self.get("get_escrow_detail", params(json!({ "order_sn": order_sn })))
            .await
    }

    /// Sets the shop-level installment status.
    pub async fn set_shop_installment_status(&self, installment_status: i64) -> ApiResult {
        self.post(
            "set_shop_installment_status",
            json!({ "installment_status": installment_status }),
        )
        .await
    }

    /// Fetches the shop-level installment status.
    pub async fn get_shop_installment_status(&self) -> ApiResult {
        self.get("get_shop_installment_status", Params::new())
            .await
    }

    /// Lists payouts in a time window.
    pub async fn get_payout_detail(
        &self,
        page_size: u32,
        page_no: u32,
        payout_time_from: i64,
        payout_time_to: i64,
    ) -> ApiResult {
        self.get(
            "get_payout_detail",
            params(json!({
                "page_size": page_size,
                "page_no": page_no,
                "payout_time_from": payout_time_from,
                "payout_time_to": payout_time_to,
            })),
        )
        .await
    }

    /// Sets installment tenures for items.
    pub async fn set_item_installment_status(
        &self,
        item_id_list: impl IdList,
        tenure_list: Vec<i64>,
        participate_plan_ahora: Option<bool>,
    ) -> ApiResult {
        self.post(
            "set_item_installment_status",
            Value::Object(params(json!({
                "item_id_list": id_array(item_id_list),
                "tenure_list": tenure_list,
                "participate_plan_ahora": participate_plan_ahora,
            }))),
        )
        .await
    }

    /// Fetches installment tenures of items.
    pub async fn get_item_installment_status(&self, item_id_list: impl IdList) -> ApiResult {
        self.post(
            "get_item_installment_status",
            json!({ "item_id_list": id_array(item_id_list) }),
        )
        .await
    }

    /// Lists the payment methods available in the shop's region.
    pub async fn get_payment_method_list(&self) -> ApiResult {
        self.get("get_payment_method_list", Params::new()).await
    }

    /// Lists wallet transactions.
    ///
    /// `filters` may carry `wallet_type`, `transaction_type`, `money_flow`
    /// and `transaction_tab_type`.
    pub async fn get_wallet_transaction_list(
        &self,
        page_no: u32,
        page_size: u32,
        create_time_from: i64,
        create_time_to: i64,
        filters: Params,
    ) -> ApiResult {
        let mut params = params(json!({
            "page_no": page_no,
            "page_size": page_size,
            "create_time_from": create_time_from,
            "create_time_to": create_time_to,
        }));
        params.extend(filters);
        self.get("get_wallet_transaction_list", params).await
    }

    /// Lists escrow releases in a time window.
    pub async fn get_escrow_list(
        &self,
        release_time_from: i64,
        release_time_to: i64,
        page_size: Option<u32>,
        page_no: Option<u32>,
    ) -> ApiResult {
        self.get(
            "get_escrow_list",
            params(json!({
                "release_time_from": release_time_from,
                "release_time_to": release_time_to,
                "page_size": page_size,
                "page_no": page_no,
            })),
        )
        .await
    }

    /// Fetches payout information.
    pub async fn get_payout_info(&self, params: Params) -> ApiResult {
        self.get("get_payout_info", params).await
    }

    /// Fetches billing transaction information.
    pub async fn get_billing_transaction_info(&self, params: Params) -> ApiResult {
        self.post("get_billing_transaction_info", Value::Object(params))
            .await
    }
}
