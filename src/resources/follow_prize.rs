use serde_json::{json, Value};

use crate::resources::{merge_defaults, params, ApiResult, Params};

resource! {
    /// Follow prize campaigns (`follow_prize/*`).
    FollowPrize => "follow_prize"
}

impl FollowPrize<'_> {
    /// Creates a follow prize campaign.
    pub async fn add_follow_prize(&self, data: Value) -> ApiResult {
        self.post("add_follow_prize", data).await
    }

    /// Deletes an upcoming campaign.
    pub async fn delete_follow_prize(&self, campaign_id: u64) -> ApiResult {
        self.post("delete_follow_prize", json!({ "campaign_id": campaign_id }))
            .await
    }

    /// Ends an ongoing campaign.
    pub async fn end_follow_prize(&self, campaign_id: u64) -> ApiResult {
        self.post("end_follow_prize", json!({ "campaign_id": campaign_id }))
            .await
    }

    /// Updates a campaign. `data` must include `campaign_id`.
    pub async fn update_follow_prize(&self, data: Value) -> ApiResult {
        self.post("update_follow_prize", data).await
    }

    /// Fetches a campaign.
    pub async fn get_follow_prize_detail(&self, campaign_id: u64) -> ApiResult {
        self.get(
            "get_follow_prize_detail",
            params(json!({ "campaign_id": campaign_id })),
        )
        .await
    }

    /// Lists campaigns. Defaults: `page_no=1`, `page_size=100`, `status=all`.
    pub async fn get_follow_prize_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(
            json!({ "page_no": 1, "page_size": 100, "status": "all" }),
            params,
        );
        self.get("get_follow_prize_list", params).await
    }
}
