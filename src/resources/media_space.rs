use serde_json::{json, Value};

use crate::clients::{FilePart, MultipartBody};
use crate::resources::{params, ApiResult, Params, UploadFile};

resource! {
    /// Image and chunked video uploads (`media_space/*`).
    ///
    /// Videos are uploaded in parts: `init_video_upload`, one
    /// `upload_video_part` per chunk, then `complete_video_upload` and
    /// polling with `get_video_upload_result`.
    MediaSpace => "media_space"
}

impl MediaSpace<'_> {
    /// Starts a chunked video upload.
    pub async fn init_video_upload(&self, file_md5: &str, file_size: u64) -> ApiResult {
        self.post(
            "init_video_upload",
            json!({ "file_md5": file_md5, "file_size": file_size }),
        )
        .await
    }

    /// Uploads one part of a video.
    pub async fn upload_video_part(
        &self,
        video_upload_id: &str,
        part_seq: u32,
        content_md5: &str,
        part_content: Value,
    ) -> ApiResult {
        self.post(
            "upload_video_part",
            json!({
                "video_upload_id": video_upload_id,
                "part_seq": part_seq,
                "content_md5": content_md5,
                "part_content": part_content,
            }),
        )
        .await
    }

    /// Completes a chunked video upload.
    pub async fn complete_video_upload(
        &self,
        video_upload_id: &str,
        part_seq_list: Vec<u32>,
    ) -> ApiResult {
        self.post(
            "complete_video_upload",
            json!({ "video_upload_id": video_upload_id, "part_seq_list": part_seq_list }),
        )
        .await
    }

    /// Polls the transcoding status of a video.
    pub async fn get_video_upload_result(&self, video_upload_id: &str) -> ApiResult {
        self.get(
            "get_video_upload_result",
            params(json!({ "video_upload_id": video_upload_id })),
        )
        .await
    }

    /// Cancels a chunked video upload.
    pub async fn cancel_video_upload(&self, video_upload_id: &str) -> ApiResult {
        self.post(
            "cancel_video_upload",
            json!({ "video_upload_id": video_upload_id }),
        )
        .await
    }

    /// Uploads an image as the `image` form field.
    ///
    /// `scene` and `ratio` are sent as text fields when given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`](crate::clients::ApiError::Io) if a file path
    /// cannot be read, plus any dispatch error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let image = client
    ///     .media_space()
    ///     .upload_image(UploadFile::path("logo.png"), Some("normal"), None)
    ///     .await?;
    /// ```
    pub async fn upload_image(
        &self,
        image: UploadFile,
        scene: Option<&str>,
        ratio: Option<&str>,
    ) -> ApiResult {
        let (data, filename) = image.load("image.jpg").await?;
        let mut fields = Vec::new();
        if let Some(scene) = scene {
            fields.push(("scene".to_string(), scene.to_string()));
        }
        if let Some(ratio) = ratio {
            fields.push(("ratio".to_string(), ratio.to_string()));
        }
        let multipart = MultipartBody {
            files: vec![FilePart {
                name: "image".to_string(),
                data,
                filename,
            }],
            fields,
        };
        self.client
            .upload(&Self::path("upload_image"), multipart, &Params::new())
            .await
    }
}
