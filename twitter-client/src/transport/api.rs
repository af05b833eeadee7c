use common::configs::{ApiConfig, DEFAULT_BASE_HOST_URL};

/// 媒体上传使用的固定地址
pub const UPLOAD_ENDPOINT: &str = "https://upload.twitter.com";

/// 主API地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterApi {
    base_host_url: String,
}

impl TwitterApi {
    pub fn new(base_host_url: impl Into<String>) -> Self {
        let base_host_url: String = base_host_url.into();
        Self {
            base_host_url: base_host_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_host_url.as_str())
    }

    pub fn base_host_url(&self) -> &str {
        &self.base_host_url
    }
}

impl Default for TwitterApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_HOST_URL)
    }
}
