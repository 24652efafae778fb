use serde_json::{json, Value};

use crate::resources::{id_array, params, ApiResult, IdList, Params};

resource! {
    /// Push (webhook) configuration (`push/*`).
    Push => "push"
}

impl Push<'_> {
    /// Updates the push configuration of the app.
    pub async fn set_app_push_config(
        &self,
        callback_url: Option<&str>,
        set_push_config_on: Vec<i64>,
        set_push_config_off: Vec<i64>,
        blocked_shop_id_list: impl IdList,
    ) -> ApiResult {
        self.post(
            "set_app_push_config",
            Value::Object(params(json!({
                "callback_url": callback_url,
                "set_push_config_on": set_push_config_on,
                "set_push_config_off": set_push_config_off,
                "blocked_shop_id_list": id_array(blocked_shop_id_list),
            }))),
        )
        .await
    }

    /// Fetches the push configuration of the app.
    pub async fn get_app_push_config(&self) -> ApiResult {
        self.get("get_app_push_config", Params::new()).await
    }

    /// Lists push messages that failed to deliver.
    pub async fn get_lost_push_message(&self) -> ApiResult {
        self.get("get_lost_push_message", Params::new()).await
    }

    /// Acknowledges lost push messages up to `last_message_id`.
    pub async fn confirm_consumed_lost_push_message(&self, last_message_id: u64) -> ApiResult {
        self.post(
            "confirm_consumed_lost_push_message",
            json!({ "last_message_id": last_message_id }),
        )
        .await
    }
}
