//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SHOP_ADMIN_BASE_URL` | `http://localhost:4000` |
//! | `SHOP_ADMIN_TOKEN_FILE` | `$HOME/.shop-admin/token` |
//! | `SHOP_ADMIN_TIMEOUT_SECS` | unset (no request timeout) |
//! | `SHOP_ADMIN_BOARD_BUFFER` | `32` |
//! | `SHOP_ADMIN_CLOUDINARY_CLOUD_NAME` | unset (image upload disabled) |
//! | `SHOP_ADMIN_CLOUDINARY_UPLOAD_PRESET` | unset (image upload disabled) |

use crate::clients::ImageHostConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_BOARD_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct AdminConfig {
    pub base_url: String,
    pub token_file: PathBuf,
    pub timeout: Option<Duration>,
    pub board_buffer: usize,
    /// Present only when both the cloud name and the upload preset are set.
    pub image_host: Option<ImageHostConfig>,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = non_empty("SHOP_ADMIN_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token_file = non_empty("SHOP_ADMIN_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_token_file(lookup("HOME")));
        let timeout = non_empty("SHOP_ADMIN_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let board_buffer = non_empty("SHOP_ADMIN_BOARD_BUFFER")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_BOARD_BUFFER);
        let image_host = match (
            non_empty("SHOP_ADMIN_CLOUDINARY_CLOUD_NAME"),
            non_empty("SHOP_ADMIN_CLOUDINARY_UPLOAD_PRESET"),
        ) {
            (Some(cloud_name), Some(upload_preset)) => Some(ImageHostConfig {
                cloud_name: cloud_name.trim().to_string(),
                upload_preset: upload_preset.trim().to_string(),
            }),
            _ => None,
        };

        Self {
            base_url,
            token_file,
            timeout,
            board_buffer,
            image_host,
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, base_url: Option<String>, token_file: Option<PathBuf>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(token_file) = token_file {
            self.token_file = token_file;
        }
        self
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// `$HOME/.shop-admin/token`, or `.shop-admin/token` relative to the
/// working directory when no home is known.
pub fn default_token_file(home: Option<String>) -> PathBuf {
    home.map(PathBuf::from)
        .unwrap_or_default()
        .join(".shop-admin")
        .join("token")
}
