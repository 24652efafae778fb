//! File inputs for multipart upload endpoints.

use std::path::PathBuf;

use bytes::Bytes;

use crate::clients::ApiError;

/// A file to upload: in-memory bytes or a path read at call time.
///
/// In-memory data is sent as is; when no filename is given the endpoint's
/// default (e.g. `image.jpg`) is used. Paths are read with `tokio::fs` and
/// their file name is sent.
///
/// # Example
///
/// ```rust
/// use shopee_api::resources::UploadFile;
///
/// let from_memory = UploadFile::bytes(vec![0xff_u8, 0xd8, 0xff]).with_filename("logo.jpg");
/// let from_disk = UploadFile::path("/tmp/banner.png");
/// # let _ = (from_memory, from_disk);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadFile {
    /// Raw contents with an optional filename.
    Bytes {
        /// The file contents.
        data: Bytes,
        /// The filename to send, if not the endpoint default.
        filename: Option<String>,
    },
    /// A file on disk.
    Path(PathBuf),
}

impl UploadFile {
    /// Wraps in-memory contents.
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Self::Bytes {
            data: data.into(),
            filename: None,
        }
    }

    /// Refers to a file on disk.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Sets the filename of in-memory contents. Has no effect on paths.
    #[must_use]
    pub fn with_filename(self, name: impl Into<String>) -> Self {
        match self {
            Self::Bytes { data, .. } => Self::Bytes {
                data,
                filename: Some(name.into()),
            },
            path @ Self::Path(_) => path,
        }
    }

    /// Resolves the contents and the filename to send.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if a path cannot be read.
    pub async fn load(self, default_filename: &str) -> Result<(Bytes, String), ApiError> {
        match self {
            Self::Bytes { data, filename } => {
                Ok((data, filename.unwrap_or_else(|| default_filename.to_string())))
            }
            Self::Path(path) => {
                let data = tokio::fs::read(&path).await?;
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map_or_else(|| default_filename.to_string(), String::from);
                Ok((Bytes::from(data), filename))
            }
        }
    }
}

impl From<Vec<u8>> for UploadFile {
    fn from(data: Vec<u8>) -> Self {
        Self::bytes(data)
    }
}

impl From<Bytes> for UploadFile {
    fn from(data: Bytes) -> Self {
        Self::bytes(data)
    }
}

impl From<PathBuf> for UploadFile {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_use_default_filename() {
        let (data, filename) =
            tokio_test::block_on(UploadFile::bytes(vec![1_u8, 2, 3]).load("image.jpg")).unwrap();
        assert_eq!(&data[..], &[1, 2, 3]);
        assert_eq!(filename, "image.jpg");
    }

    #[test]
    fn test_bytes_keep_explicit_filename() {
        let file = UploadFile::bytes(vec![0_u8]).with_filename("clip.mp4");
        let (_, filename) = tokio_test::block_on(file.load("video.mp4")).unwrap();
        assert_eq!(filename, "clip.mp4");
    }

    #[tokio::test]
    async fn test_path_is_read_with_its_filename() {
        let path = std::env::temp_dir().join(format!("shopee-upload-{}.png", std::process::id()));
        tokio::fs::write(&path, b"png-bytes").await.unwrap();

        let (data, filename) = UploadFile::path(&path).load("image.jpg").await.unwrap();
        assert_eq!(&data[..], b"png-bytes");
        assert_eq!(filename, path.file_name().unwrap().to_str().unwrap());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_path_is_io_error() {
        let result = UploadFile::path("/definitely/not/here.jpg")
            .load("image.jpg")
            .await;
        assert!(matches!(result, Err(ApiError::Io(_))));
    }
}
