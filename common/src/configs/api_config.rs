use serde::{Deserialize, Serialize};

/// 默认的Twitter API主机
pub const DEFAULT_BASE_HOST_URL: &str = "https://api.twitter.com";

/// API访问配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 主API地址
    pub base_host_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent请求头
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_host_url: DEFAULT_BASE_HOST_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("twitter-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
