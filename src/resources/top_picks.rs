use serde_json::{json, Value};

use crate::resources::{id_array, params, ApiResult, IdList, Params};

resource! {
    /// Top picks collections (`top_picks/*`).
    TopPicks => "top_picks"
}

impl TopPicks<'_> {
    /// Lists top picks collections.
    pub async fn get_top_picks_list(&self) -> ApiResult {
        self.get("get_top_picks_list", Params::new()).await
    }

    /// Creates a collection.
    pub async fn add_top_picks(
        &self,
        name: &str,
        item_id_list: impl IdList,
        is_activated: bool,
    ) -> ApiResult {
        self.post(
            "add_top_picks",
            json!({
                "name": name,
                "item_id_list": id_array(item_id_list),
                "is_activated": is_activated,
            }),
        )
        .await
    }

    /// Updates a collection. Only the given fields change.
    pub async fn update_top_picks(
        &self,
        top_picks_id: u64,
        name: Option<&str>,
        item_id_list: Option<Vec<u64>>,
        is_activated: Option<bool>,
    ) -> ApiResult {
        self.post(
            "update_top_picks",
            Value::Object(params(json!({
                "top_picks_id": top_picks_id,
                "name": name,
                "item_id_list": item_id_list,
                "is_activated": is_activated,
            }))),
        )
        .await
    }

    /// Deletes a collection.
    pub async fn delete_top_picks(&self, top_picks_id: u64) -> ApiResult {
        self.post("delete_top_picks", json!({ "top_picks_id": top_picks_id }))
            .await
    }
}
