use serde::Deserialize;

/// 传输安全配置
#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    /// 仅允许HTTPS
    pub https_only: bool,
    /// 额外信任的根证书（PEM文件路径）
    #[serde(default)]
    pub root_certificates: Vec<String>,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            https_only: true,
            root_certificates: Vec::new(),
        }
    }
}
