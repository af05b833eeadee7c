use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("参数无效: {0}")]
    InvalidArgument(String),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP请求错误: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL解析错误: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO错误: {0}")]
    IO(#[from] std::io::Error),

    #[error("编解码错误: {0}")]
    Codec(String),

    #[error("请求签名错误: {0}")]
    Signature(String),

    #[error("Twitter API错误 (HTTP {status}, code {code:?}): {message}")]
    Api {
        status: u16,
        code: Option<i32>,
        message: String,
    },

    #[error("服务创建失败: {0}")]
    ServiceCreation(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl Error {
    /// Twitter返回的错误码，仅对API错误有效
    pub fn api_code(&self) -> Option<i32> {
        match self {
            Error::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// HTTP状态码，API错误或带状态的传输错误
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Internal(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Internal(err.to_string())
    }
}
