use serde::{Deserialize, Serialize};

use crate::converter::safe;

/// 错误响应体 `{"errors": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrors {
    #[serde(default, deserialize_with = "safe::list")]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

impl ApiErrors {
    /// 第一个错误
    pub fn first(&self) -> Option<&ApiError> {
        self.errors.first()
    }
}
