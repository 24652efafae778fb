use serde_json::{json, Value};

use crate::resources::{params, ApiResult, Params};

resource! {
    /// Shipping and fulfilment (`logistics/*`).
    ///
    /// Shipping documents are downloaded as raw bytes; use
    /// [`ApiResponse::save_to`](crate::clients::ApiResponse::save_to) to write
    /// them to disk.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let pdf = client
    ///     .logistic()
    ///     .download_shipping_document(json!([{ "order_sn": "2311150001" }]), None)
    ///     .await?;
    /// pdf.save_to("label.pdf").await?;
    /// ```
    Logistic => "logistics"
}

/// Drops `None` arguments from a JSON body.
fn body(value: Value) -> Value {
    Value::Object(params(value))
}

impl Logistic<'_> {
    /// Fetches the parameters required to ship an order.
    pub async fn get_shipping_parameter(&self, order_sn: &str, package_number: &str) -> ApiResult {
        self.get(
            "get_shipping_parameter",
            params(json!({ "order_sn": order_sn, "package_number": package_number })),
        )
        .await
    }

    /// Fetches the parameters required to ship a booking.
    pub async fn get_booking_shipping_parameter(&self, booking_sn: &str) -> ApiResult {
        self.get(
            "get_booking_shipping_parameter",
            params(json!({ "booking_sn": booking_sn })),
        )
        .await
    }

    /// Fetches the tracking number of an order.
    pub async fn get_tracking_number(&self, order_sn: &str, mut params: Params) -> ApiResult {
        params.insert("order_sn".to_string(), Value::from(order_sn));
        self.get("get_tracking_number", params).await
    }

    /// Fetches the tracking number of a booking.
    pub async fn get_booking_tracking_number(&self, booking_sn: &str, mut params: Params) -> ApiResult {
        params.insert("booking_sn".to_string(), Value::from(booking_sn));
        self.get("get_booking_tracking_number", params).await
    }

    /// Arranges shipment of an order.
    ///
    /// Exactly one of `pickup`, `dropoff` or `non_integrated` is normally
    /// given, as returned by [`get_shipping_parameter`](Self::get_shipping_parameter).
    pub async fn ship_order(
        &self,
        order_sn: &str,
        package_number: Option<&str>,
        pickup: Option<Value>,
        dropoff: Option<Value>,
        non_integrated: Option<Value>,
    ) -> ApiResult {
        self.post(
            "ship_order",
            body(json!({
                "order_sn": order_sn,
                "package_number": package_number,
                "pickup": pickup,
                "dropoff": dropoff,
                "non_integrated": non_integrated,
            })),
        )
        .await
    }

    /// Arranges shipment of a booking.
    pub async fn ship_booking(
        &self,
        booking_sn: &str,
        pickup: Option<Value>,
        dropoff: Option<Value>,
        non_integrated: Option<Value>,
    ) -> ApiResult {
        self.post(
            "ship_booking",
            body(json!({
                "booking_sn": booking_sn,
                "pickup": pickup,
                "dropoff": dropoff,
                "non_integrated": non_integrated,
            })),
        )
        .await
    }

    /// Updates the pickup details of a shipped order.
    pub async fn update_shipping_order(
        &self,
        order_sn: &str,
        package_number: Option<&str>,
        pickup: Value,
    ) -> ApiResult {
        self.post(
            "update_shipping_order",
            body(json!({
                "order_sn": order_sn,
                "package_number": package_number,
                "pickup": pickup,
            })),
        )
        .await
    }

    /// Fetches the shipping document types available for orders.
    pub async fn get_shipping_document_parameter(&self, order_list: Value) -> ApiResult {
        self.post(
            "get_shipping_document_parameter",
            json!({ "order_list": order_list }),
        )
        .await
    }

    /// Fetches the shipping document types available for bookings.
    pub async fn get_booking_shipping_document_parameter(&self, booking_list: Value) -> ApiResult {
        self.post(
            "get_booking_shipping_document_parameter",
            json!({ "booking_list": booking_list }),
        )
        .await
    }

    /// Starts generating shipping documents.
    pub async fn create_shipping_document(&self, order_list: Value) -> ApiResult {
        self.post("create_shipping_document", json!({ "order_list": order_list }))
            .await
    }

    /// Starts generating booking shipping documents.
    pub async fn create_booking_shipping_document(&self, booking_list: Value) -> ApiResult {
        self.post(
            "create_booking_shipping_document",
            json!({ "booking_list": booking_list }),
        )
        .await
    }

    /// Polls the generation status of shipping documents.
    pub async fn get_shipping_document_result(&self, order_list: Value) -> ApiResult {
        self.post(
            "get_shipping_document_result",
            json!({ "order_list": order_list }),
        )
        .await
    }

    /// Polls the generation status of booking shipping documents.
    pub async fn get_booking_shipping_document_result(&self, booking_list: Value) -> ApiResult {
        self.post(
            "get_booking_shipping_document_result",
            json!({ "booking_list": booking_list }),
        )
        .await
    }

    /// Downloads generated shipping documents. The result is usually
    /// [`ApiResponse::Raw`](crate::clients::ApiResponse::Raw).
    pub async fn download_shipping_document(
        &self,
        order_list: Value,
        shipping_document_type: Option<&str>,
    ) -> ApiResult {
        self.post(
            "download_shipping_document",
            body(json!({
                "order_list": order_list,
                "shipping_document_type": shipping_document_type,
            })),
        )
        .await
    }

    /// Downloads generated booking shipping documents.
    pub async fn download_booking_shipping_document(
        &self,
        booking_list: Value,
        shipping_document_type: Option<&str>,
    ) -> ApiResult {
        self.post(
            "download_booking_shipping_document",
            body(json!({
                "booking_list": booking_list,
                "shipping_document_type": shipping_document_type,
            })),
        )
        .await
    }

    /// Fetches the tracking history of an order.
    pub async fn get_tracking_info(&self, order_sn: &str, package_number: Option<&str>) -> ApiResult {
        self.get(
            "get_tracking_info",
            params(json!({ "order_sn": order_sn, "package_number": package_number })),
        )
        .await
    }

    /// Fetches the tracking history of a booking.
    pub async fn get_booking_tracking_info(&self, booking_sn: &str) -> ApiResult {
        self.get(
            "get_booking_tracking_info",
            params(json!({ "booking_sn": booking_sn })),
        )
        .await
    }

    /// Lists the shop's addresses.
    pub async fn get_address_list(&self) -> ApiResult {
        self.get("get_address_list", Params::new()).await
    }

    /// Configures default pickup and return addresses.
    pub async fn set_address_config(
        &self,
        address_type_config: Value,
        show_pickup_address: Option<bool>,
    ) -> ApiResult {
        self.post(
            "set_address_config",
            body(json!({
                "address_type_config": address_type_config,
                "show_pickup_address": show_pickup_address,
            })),
        )
        .await
    }

    /// Deletes an address.
    pub async fn delete_address(&self, address_id: u64) -> ApiResult {
        self.post("delete_address", json!({ "address_id": address_id }))
            .await
    }

    /// Lists the logistics channels of the shop.
    pub async fn get_channel_list(&self) -> ApiResult {
        self.get("get_channel_list", Params::new()).await
    }

    /// Enables or disables a logistics channel.
    pub async fn update_channel(
        &self,
        logistics_channel_id: u64,
        enabled: bool,
        cod_enabled: Option<bool>,
    ) -> ApiResult {
        self.post(
            "update_channel",
            body(json!({
                "logistics_channel_id": logistics_channel_id,
                "enabled": enabled,
                "cod_enabled": cod_enabled,
            })),
        )
        .await
    }

    /// Ships several orders at once.
    pub async fn batch_ship_order(
        &self,
        order_list: Value,
        pickup: Option<Value>,
        dropoff: Option<Value>,
        non_integrated: Option<Value>,
    ) -> ApiResult {
        self.post(
            "batch_ship_order",
            body(json!({
                "order_list": order_list,
                "pickup": pickup,
                "dropoff": dropoff,
                "non_integrated": non_integrated,
            })),
        )
        .await
    }

    /// Fetches the data needed to print a self-designed shipping label.
    pub async fn get_shipping_document_data_info(
        &self,
        order_sn: &str,
        package_number: Option<&str>,
        recipient_address_info: Option<Value>,
    ) -> ApiResult {
        self.post(
            "get_shipping_document_data_info",
            body(json!({
                "order_sn": order_sn,
                "package_number": package_number,
                "recipient_address_info": recipient_address_info,
            })),
        )
        .await
    }

    /// Fetches the data needed to print a self-designed booking label.
    pub async fn get_booking_shipping_document_data_info(
        &self,
        booking_sn: &str,
        recipient_address_info: Option<Value>,
    ) -> ApiResult {
        self.post(
            "get_booking_shipping_document_data_info",
            body(json!({
                "booking_sn": booking_sn,
                "recipient_address_info": recipient_address_info,
            })),
        )
        .await
    }
}
