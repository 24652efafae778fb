use serde_json::{json, Value};

use crate::clients::{FilePart, MultipartBody};
use crate::resources::{merge_defaults, params, ApiResult, Params, UploadFile};

resource! {
    /// Return and refund handling (`returns/*`).
    Returns => "returns"
}

impl Returns<'_> {
    /// Fetches a return.
    pub async fn get_return_detail(&self, return_sn: &str) -> ApiResult {
        self.get("get_return_detail", params(json!({ "return_sn": return_sn })))
            .await
    }

    /// Lists returns. Defaults: `page_no=1`, `page_size=50`.
    pub async fn get_return_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(json!({ "page_no": 1, "page_size": 50 }), params);
        self.get("get_return_list", params).await
    }

    /// Accepts a return.
    pub async fn confirm(&self, return_sn: &str) -> ApiResult {
        self.post("confirm", json!({ "return_sn": return_sn })).await
    }

    /// Disputes a return. `extra` may carry `dispute_reason`,
    /// `dispute_text_reason` and `images`.
    pub async fn dispute(&self, return_sn: &str, email: &str, extra: Params) -> ApiResult {
        let mut body = params(json!({ "return_sn": return_sn, "email": email }));
        body.extend(extra);
        self.post("dispute", Value::Object(body)).await
    }

    /// Lists the solutions that can be offered for a return.
    pub async fn get_available_solutions(&self, return_sn: &str) -> ApiResult {
        self.get(
            "get_available_solutions",
            params(json!({ "return_sn": return_sn })),
        )
        .await
    }

    /// Offers a solution to the buyer.
    pub async fn offer(
        &self,
        return_sn: &str,
        proposed_solution: i64,
        proposed_adjusted_refund_amount: Option<f64>,
    ) -> ApiResult {
        self.post(
            "offer",
            Value::Object(params(json!({
                "return_sn": return_sn,
                "proposed_solution": proposed_solution,
                "proposed_adjusted_refund_amount": proposed_adjusted_refund_amount,
            }))),
        )
        .await
    }

    /// Accepts the buyer's offer.
    pub async fn accept_offer(&self, return_sn: &str) -> ApiResult {
        self.post("accept_offer", json!({ "return_sn": return_sn }))
            .await
    }

    /// Converts an image into a dispute proof URL.
    ///
    /// The image is sent as the `upload_image` form field and `return_sn`
    /// travels in the query string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`](crate::clients::ApiError::Io) if a file path
    /// cannot be read, plus any dispatch error.
    pub async fn convert_image(&self, return_sn: &str, image: UploadFile) -> ApiResult {
        let (data, filename) = image.load("image.jpg").await?;
        let multipart = MultipartBody {
            files: vec![FilePart {
                name: "upload_image".to_string(),
                data,
                filename,
            }],
            fields: Vec::new(),
        };
        self.client
            .upload(
                &Self::path("convert_image"),
                multipart,
                &params(json!({ "return_sn": return_sn })),
            )
            .await
    }

    /// Attaches proof to a dispute.
    pub async fn upload_proof(
        &self,
        return_sn: &str,
        photo: Option<Value>,
        description: &str,
    ) -> ApiResult {
        self.post(
            "upload_proof",
            Value::Object(params(json!({
                "return_sn": return_sn,
                "photo": photo,
                "description": description,
            }))),
        )
        .await
    }

    /// Lists proof attached to a dispute.
    pub async fn query_proof(&self, return_sn: &str) -> ApiResult {
        self.get("query_proof", params(json!({ "return_sn": return_sn })))
            .await
    }

    /// Lists the dispute reasons applicable to a return.
    pub async fn get_return_dispute_reason(&self, return_sn: &str) -> ApiResult {
        self.get(
            "get_return_dispute_reason",
            params(json!({ "return_sn": return_sn })),
        )
        .await
    }
}
