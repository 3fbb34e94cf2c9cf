//! # Image Client
//!
//! Uploads product images to the Cloudinary asset host and returns the
//! hosted URL that goes into a product's `imageUrl`.
//!
//! The asset host is not the admin backend: requests go straight to
//! `https://api.cloudinary.com/v1_1/{cloud_name}/image/upload` as an unsigned
//! multipart upload (`file` + `upload_preset`), without the session token.
use crate::error::ImageError;
use admin_framework::decode_field;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 500 * 1024;

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Which Cloudinary account and unsigned preset to upload with.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHostConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

pub struct ImageClient {
    client: reqwest::Client,
    api_base: String,
    host: ImageHostConfig,
}

impl ImageClient {
    pub fn new(host: ImageHostConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            host,
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.api_base, self.host.cloud_name)
    }

    /// Uploads the file at `path` and returns its `secure_url`.
    ///
    /// The size limit is checked before the file is read.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn upload(&self, path: &Path) -> Result<String, ImageError> {
        check_image_file(path).await?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ImageError::Io(e.to_string()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("upload_preset", self.host.upload_preset.clone());
        debug!(url = %self.upload_url(), "Uploading image");

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Image upload transport failure");
                ImageError::UploadFailed(e.to_string())
            })?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| ImageError::UploadFailed(format!("unreadable response: {e}")))?;
        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("no message")
                .to_string();
            warn!(status = status.as_u16(), %message, "Image upload rejected");
            return Err(ImageError::UploadFailed(format!("{status}: {message}")));
        }

        let url = secure_url(body)?;
        info!(%url, "Image uploaded");
        Ok(url)
    }
}

/// Fails with [`ImageError::TooLarge`] when `path` is over [`MAX_IMAGE_BYTES`].
pub async fn check_image_file(path: &Path) -> Result<(), ImageError> {
    let size = tokio::fs::metadata(path)
        .await
        .map_err(|e| ImageError::Io(format!("{}: {e}", path.display())))?
        .len();
    if size > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge { size });
    }
    Ok(())
}

/// Reads the hosted URL out of an upload response.
pub fn secure_url(body: Value) -> Result<String, ImageError> {
    decode_field(body, "secure_url").map_err(|e| ImageError::UploadFailed(e.to_string()))
}
