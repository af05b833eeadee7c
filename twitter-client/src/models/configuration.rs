use serde::{Deserialize, Serialize};

use crate::converter::safe;

/// `help/configuration.json` 返回的服务端配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub dm_text_character_limit: i32,
    pub characters_reserved_per_media: i32,
    pub max_media_per_upload: i32,
    #[serde(deserialize_with = "safe::list")]
    pub non_username_paths: Vec<String>,
    pub photo_size_limit: i64,
    pub photo_sizes: SizeEntities,
    pub short_url_length: i32,
    pub short_url_length_https: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeEntities {
    pub thumb: Option<MediaSize>,
    pub small: Option<MediaSize>,
    pub medium: Option<MediaSize>,
    pub large: Option<MediaSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSize {
    #[serde(rename = "w")]
    pub width: i32,
    #[serde(rename = "h")]
    pub height: i32,
    pub resize: String,
}
