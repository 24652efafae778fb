use serde_json::{json, Map, Value};

use crate::clients::{FilePart, MultipartBody};
use crate::resources::{merge_defaults, params, ApiResult, Params, UploadFile};

resource! {
    /// Seller chat (`sellerchat/*`).
    Chat => "sellerchat"
}

/// Wraps plain text content as `{"text": ...}`; other values pass through.
fn message_content(content: Value) -> Value {
    match content {
        Value::String(text) => json!({ "text": text }),
        other => other,
    }
}

impl Chat<'_> {
    /// Lists messages of a conversation.
    pub async fn get_message(&self, conversation_id: u64, mut params: Params) -> ApiResult {
        params.insert("conversation_id".to_string(), Value::from(conversation_id));
        self.get("get_message", params).await
    }

    /// Sends a message to a buyer.
    ///
    /// A string `content` is sent as a text message. `business_type` and
    /// `conversation_id` are included only when both are non-zero.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// client.chat().send_message(88_001, "text", "Hello!", 0, 0).await?;
    /// ```
    pub async fn send_message(
        &self,
        to_id: u64,
        message_type: &str,
        content: impl Into<Value>,
        business_type: u32,
        conversation_id: u64,
    ) -> ApiResult {
        let mut body = Map::new();
        body.insert("to_id".to_string(), Value::from(to_id));
        body.insert("message_type".to_string(), Value::from(message_type));
        body.insert("content".to_string(), message_content(content.into()));
        if business_type > 0 && conversation_id > 0 {
            body.insert("business_type".to_string(), Value::from(business_type));
            body.insert("conversation_id".to_string(), Value::from(conversation_id));
        }
        self.post("send_message", Value::Object(body)).await
    }

    /// Lists conversations. Defaults: `direction=latest`, `type=all`.
    pub async fn get_conversation_list(&self, params: Params) -> ApiResult {
        let params = merge_defaults(json!({ "direction": "latest", "type": "all" }), params);
        self.get("get_conversation_list", params).await
    }

    /// Fetches one conversation.
    pub async fn get_one_conversation(&self, conversation_id: u64, business_type: u32) -> ApiResult {
        self.get(
            "get_one_conversation",
            params(json!({
                "conversation_id": conversation_id,
                "business_type": business_type,
            })),
        )
        .await
    }

    /// Deletes a conversation.
    pub async fn delete_conversation(&self, conversation_id: u64) -> ApiResult {
        self.post(
            "delete_conversation",
            json!({ "conversation_id": conversation_id }),
        )
        .await
    }

    /// Counts conversations with unread messages.
    pub async fn get_unread_conversation_count(&self) -> ApiResult {
        self.get("get_unread_conversation_count", Params::new())
            .await
    }

    /// Pins a conversation.
    pub async fn pin_conversation(&self, conversation_id: u64) -> ApiResult {
        self.post("pin_conversation", json!({ "conversation_id": conversation_id }))
            .await
    }

    /// Unpins a conversation.
    pub async fn unpin_conversation(&self, conversation_id: u64) -> ApiResult {
        self.post(
            "unpin_conversation",
            json!({ "conversation_id": conversation_id }),
        )
        .await
    }

    /// Marks a conversation read up to `last_read_message_id`.
    pub async fn read_conversation(
        &self,
        conversation_id: u64,
        last_read_message_id: &str,
    ) -> ApiResult {
        self.post(
            "read_conversation",
            json!({
                "conversation_id": conversation_id,
                "last_read_message_id": last_read_message_id,
            }),
        )
        .await
    }

    /// Marks a conversation unread.
    pub async fn unread_conversation(&self, conversation_id: u64) -> ApiResult {
        self.post(
            "unread_conversation",
            json!({ "conversation_id": conversation_id }),
        )
        .await
    }

    /// Mutes a conversation.
    pub async fn mute_conversation(&self, conversation_id: u64) -> ApiResult {
        self.post("mute_conversation", json!({ "conversation_id": conversation_id }))
            .await
    }

    /// Uploads an image for use in messages. The form field is `file`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`](crate::clients::ApiError::Io) if a file path
    /// cannot be read, plus any dispatch error.
    pub async fn upload_image(&self, file: UploadFile) -> ApiResult {
        self.upload_file("upload_image", file, "image.jpg").await
    }

    /// Sends an auto-reply message.
    pub async fn send_autoreply_message(&self, to_id: u64, content: impl Into<Value>) -> ApiResult {
        self.post(
            "send_autoreply_message",
            json!({ "to_id": to_id, "content": message_content(content.into()) }),
        )
        .await
    }

    /// Deletes (recalls) a message.
    pub async fn delete_message(&self, message_id: &str, message_type: &str) -> ApiResult {
        self.post(
            "delete_message",
            json!({ "message_id": message_id, "message_type": message_type }),
        )
        .await
    }

    /// Uploads a video for use in messages. The form field is `file`.
    ///
    /// # Errors
    ///
    /// Same as [`upload_image`](Self::upload_image).
    pub async fn upload_video(&self, file: UploadFile) -> ApiResult {
        self.upload_file("upload_video", file, "video.mp4").await
    }

    /// Polls the processing status of an uploaded video.
    pub async fn get_video_upload_result(&self, vid: &str) -> ApiResult {
        self.get("get_video_upload_result", params(json!({ "vid": vid })))
            .await
    }

    async fn upload_file(&self, action: &str, file: UploadFile, default_filename: &str) -> ApiResult {
        let (data, filename) = file.load(default_filename).await?;
        let multipart = MultipartBody {
            files: vec![FilePart {
                name: "file".to_string(),
                data,
                filename,
            }],
            fields: Vec::new(),
        };
        self.client
            .upload(&Self::path(action), multipart, &Params::new())
            .await
    }
}
