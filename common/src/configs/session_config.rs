use std::fmt;

use serde::Deserialize;

/// 会话配置
///
/// 用户会话需要 `token` 和 `token_secret`，
/// 访客/应用会话只需要 `bearer_token`（可选 `guest_token`）
#[derive(Clone, Default, Deserialize)]
pub struct SessionConfig {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub token: Option<String>,
    pub token_secret: Option<String>,
    pub bearer_token: Option<String>,
    pub guest_token: Option<String>,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("user_id", &self.user_id)
            .field("screen_name", &self.screen_name)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("token_secret", &self.token_secret.as_ref().map(|_| "***"))
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "***"))
            .field("guest_token", &self.guest_token)
            .finish()
    }
}
