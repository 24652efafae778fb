use chrono::{Duration, NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};

use crate::resources::{merge_defaults, params, ApiResult, Params};

resource! {
    /// Cross-border first-mile shipping (`first_mile/*`).
    FirstMile => "first_mile"
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the UTC calendar day of a Unix timestamp.
fn utc_day(timestamp: i64) -> NaiveDate {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .unwrap_or_else(Utc::now)
        .date_naive()
}

impl FirstMile<'_> {
    /// Lists orders not yet bound to a first-mile tracking number.
    ///
    /// Defaults: `page_size=50`,
    /// `response_optional_fields=logistics_status,package_number`.
    pub async fn get_unbind_order_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(
            json!({
                "page_size": 50,
                "response_optional_fields": "logistics_status,package_number",
            }),
            params,
        );
        self.get("get_unbind_order_list", params).await
    }

    /// Fetches the details of a first-mile tracking number. An empty
    /// `cursor` is not sent.
    pub async fn get_detail(&self, first_mile_tracking_number: &str, cursor: Option<&str>) -> ApiResult {
        self.get(
            "get_detail",
            params(json!({
                "first_mile_tracking_number": first_mile_tracking_number,
                "cursor": cursor.filter(|c| !c.is_empty()),
            })),
        )
        .await
    }

    /// Generates first-mile tracking numbers.
    pub async fn generate_first_mile_tracking_number(
        &self,
        declare_date: &str,
        quantity: u32,
    ) -> ApiResult {
        self.post(
            "generate_first_mile_tracking_number",
            json!({ "declare_date": declare_date, "quantity": quantity }),
        )
        .await
    }

    /// Binds orders to a first-mile tracking number.
    pub async fn bind_first_mile_tracking_number(&self, data: Value) -> ApiResult {
        self.post("bind_first_mile_tracking_number", data).await
    }

    /// Unbinds orders from a first-mile tracking number.
    pub async fn unbind_first_mile_tracking_number(
        &self,
        first_mile_tracking_number: &str,
        order_list: Value,
    ) -> ApiResult {
        self.post(
            "unbind_first_mile_tracking_number",
            json!({
                "first_mile_tracking_number": first_mile_tracking_number,
                "order_list": order_list,
            }),
        )
        .await
    }

    /// Lists first-mile tracking numbers.
    ///
    /// Defaults: the last seven UTC days (`YYYY-MM-DD`) and `page_size=50`.
    pub async fn get_tracking_number_list(&self, params: Params) -> ApiResult {
        let today = utc_day(self.client.config().time_source().now());
        let params = merge_defaults(
            json!({
                "from_date": (today - Duration::days(7)).format(DATE_FORMAT).to_string(),
                "to_date": today.format(DATE_FORMAT).to_string(),
                "page_size": 50,
            }),
            params,
        );
        self.get("get_tracking_number_list", params).await
    }

    /// Fetches waybills for first-mile tracking numbers.
    pub async fn get_waybill(&self, first_mile_tracking_number_list: Value) -> ApiResult {
        self.post(
            "get_waybill",
            json!({ "first_mile_tracking_number_list": first_mile_tracking_number_list }),
        )
        .await
    }

    /// Lists first-mile channels, optionally for one region.
    pub async fn get_channel_list(&self, region: Option<&str>) -> ApiResult {
        self.get("get_channel_list", params(json!({ "region": region })))
            .await
    }
}
