use std::fmt;

use serde::{Deserialize, Serialize};

/// 应用认证配置（consumer key/secret）
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthConfig {
    /// Consumer Key
    pub consumer_key: String,
    /// Consumer Secret
    pub consumer_secret: String,
}

impl AuthConfig {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }
}

// 密钥不输出到日志
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("key", "super-secret");
        let printed = format!("{:?}", config);
        assert!(printed.contains("key"));
        assert!(!printed.contains("super-secret"));
    }
}
