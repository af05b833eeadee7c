use serde::{Deserialize, Serialize};

/// 媒体上传结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub media_id: i64,
    pub media_id_string: String,
    pub size: i64,
    pub image: Option<MediaImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaImage {
    #[serde(rename = "w")]
    pub width: i32,
    #[serde(rename = "h")]
    pub height: i32,
    pub image_type: String,
}
