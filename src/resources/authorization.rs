use serde_json::json;

use crate::resources::ApiResult;

resource! {
    /// Token exchange endpoints (`auth/*`).
    ///
    /// These calls are signed without `access_token` and `shop_id`. Most
    /// callers want [`Auth`](crate::auth::Auth), which turns the responses
    /// into a [`Session`](crate::auth::Session).
    Authorization => "auth"
}

impl Authorization<'_> {
    /// Exchanges an authorization `code` for tokens.
    pub async fn get_token(&self, code: &str, shop_id: u64) -> ApiResult {
        let partner_id = self.client.config().partner_id().get();
        self.post(
            "token/get",
            json!({ "code": code, "shop_id": shop_id, "partner_id": partner_id }),
        )
        .await
    }

    /// Exchanges a refresh token for a new token pair.
    pub async fn refresh_new_token(&self, refresh_token: &str, shop_id: u64) -> ApiResult {
        let partner_id = self.client.config().partner_id().get();
        self.post(
            "access_token/get",
            json!({
                "refresh_token": refresh_token,
                "shop_id": shop_id,
                "partner_id": partner_id,
            }),
        )
        .await
    }
}
