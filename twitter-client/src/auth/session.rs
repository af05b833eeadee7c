use std::fmt;

use common::configs::SessionConfig;
use common::{Error, Result};

/// 用户级OAuth 1.0a令牌
#[derive(Clone, PartialEq, Eq)]
pub struct TwitterAuthToken {
    pub token: String,
    pub secret: String,
}

impl TwitterAuthToken {
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for TwitterAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterAuthToken")
            .field("token", &self.token)
            .field("secret", &"***")
            .finish()
    }
}

/// 应用级Bearer令牌，访客会话额外带guest token
#[derive(Clone, PartialEq, Eq)]
pub struct GuestAuthToken {
    pub access_token: String,
    pub guest_token: Option<String>,
}

impl fmt::Debug for GuestAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestAuthToken")
            .field("access_token", &"***")
            .field("guest_token", &self.guest_token)
            .finish()
    }
}

/// 已登录用户的会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterSession {
    pub user_id: i64,
    pub screen_name: String,
    pub auth_token: TwitterAuthToken,
}

/// 访客/应用会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSession {
    pub auth_token: GuestAuthToken,
}

/// API调用使用的会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    User(TwitterSession),
    Guest(GuestSession),
}

impl Session {
    /// 创建用户会话
    pub fn user(
        user_id: i64,
        screen_name: impl Into<String>,
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Session::User(TwitterSession {
            user_id,
            screen_name: screen_name.into(),
            auth_token: TwitterAuthToken::new(token, secret),
        })
    }

    /// 创建访客会话
    pub fn guest(access_token: impl Into<String>, guest_token: Option<String>) -> Self {
        Session::Guest(GuestSession {
            auth_token: GuestAuthToken {
                access_token: access_token.into(),
                guest_token,
            },
        })
    }

    /// 会话ID，访客会话为0
    pub fn id(&self) -> i64 {
        match self {
            Session::User(session) => session.user_id,
            Session::Guest(_) => 0,
        }
    }

    /// 从配置构建会话，优先使用用户令牌
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        match (&config.token, &config.token_secret, &config.bearer_token) {
            (Some(token), Some(secret), _) => Ok(Session::user(
                config.user_id.unwrap_or_default(),
                config.screen_name.clone().unwrap_or_default(),
                token.clone(),
                secret.clone(),
            )),
            (_, _, Some(bearer)) => Ok(Session::guest(bearer.clone(), config.guest_token.clone())),
            _ => Err(Error::InvalidArgument(
                "会话配置需要 token/token_secret 或 bearer_token".to_string(),
            )),
        }
    }
}
