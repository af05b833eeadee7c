use std::path::PathBuf;
use std::time::Duration;

use reqwest::tls::Version;
use reqwest::{Certificate, ClientBuilder};
use tracing::debug;

use common::configs::{ApiConfig, TlsConfig};
use common::Result;

/// 传输安全设置，应用到每个适配器的HTTP客户端
#[derive(Debug, Clone)]
pub struct TransportSecurity {
    pub https_only: bool,
    pub root_certificates: Vec<PathBuf>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportSecurity {
    fn default() -> Self {
        Self::from_config(&TlsConfig::default(), &ApiConfig::default())
    }
}

impl TransportSecurity {
    pub fn from_config(tls: &TlsConfig, api: &ApiConfig) -> Self {
        Self {
            https_only: tls.https_only,
            root_certificates: tls.root_certificates.iter().map(PathBuf::from).collect(),
            timeout: Duration::from_secs(api.timeout_secs),
            user_agent: api.user_agent.clone(),
        }
    }

    /// 允许明文HTTP，仅用于本地测试服务器
    pub fn insecure_for_testing() -> Self {
        Self {
            https_only: false,
            ..Self::default()
        }
    }

    pub fn apply(&self, mut builder: ClientBuilder) -> Result<ClientBuilder> {
        for path in &self.root_certificates {
            let pem = std::fs::read(path)?;
            builder = builder.add_root_certificate(Certificate::from_pem(&pem)?);
            debug!("加载根证书: {}", path.display());
        }

        Ok(builder
            .https_only(self.https_only)
            .min_tls_version(Version::TLS_1_2)
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone()))
    }
}
