use serde::{Deserialize, Serialize};

use crate::converter::safe;

use super::{Card, User};

/// 推文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweet {
    pub id: i64,
    pub id_str: String,
    pub created_at: String,
    pub text: Option<String>,
    /// `tweet_mode=extended` 时返回完整文本
    pub full_text: Option<String>,
    #[serde(deserialize_with = "safe::list")]
    pub display_text_range: Vec<i32>,
    pub truncated: bool,
    pub source: Option<String>,
    pub in_reply_to_status_id: Option<i64>,
    pub in_reply_to_user_id: Option<i64>,
    pub in_reply_to_screen_name: Option<String>,
    pub user: Option<User>,
    pub entities: Option<TweetEntities>,
    pub extended_entities: Option<TweetEntities>,
    pub favorite_count: Option<i64>,
    pub retweet_count: i64,
    pub favorited: bool,
    pub retweeted: bool,
    pub possibly_sensitive: bool,
    pub lang: Option<String>,
    pub quoted_status_id: Option<i64>,
    pub quoted_status: Option<Box<Tweet>>,
    pub retweeted_status: Option<Box<Tweet>>,
    pub card: Option<Card>,
    #[serde(deserialize_with = "safe::list")]
    pub withheld_in_countries: Vec<String>,
}

impl Tweet {
    /// 优先返回完整文本
    pub fn display_text(&self) -> &str {
        self.full_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetEntities {
    #[serde(deserialize_with = "safe::list")]
    pub urls: Vec<UrlEntity>,
    #[serde(deserialize_with = "safe::list")]
    pub user_mentions: Vec<MentionEntity>,
    #[serde(deserialize_with = "safe::list")]
    pub media: Vec<MediaEntity>,
    #[serde(deserialize_with = "safe::list")]
    pub hashtags: Vec<HashtagEntity>,
    #[serde(deserialize_with = "safe::list")]
    pub symbols: Vec<SymbolEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlEntity {
    #[serde(deserialize_with = "safe::list")]
    pub indices: Vec<i32>,
    pub url: String,
    pub expanded_url: String,
    pub display_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionEntity {
    #[serde(deserialize_with = "safe::list")]
    pub indices: Vec<i32>,
    pub id: i64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaEntity {
    #[serde(deserialize_with = "safe::list")]
    pub indices: Vec<i32>,
    pub id: i64,
    pub id_str: String,
    pub media_url_https: String,
    pub url: String,
    pub display_url: String,
    pub expanded_url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashtagEntity {
    #[serde(deserialize_with = "safe::list")]
    pub indices: Vec<i32>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolEntity {
    #[serde(deserialize_with = "safe::list")]
    pub indices: Vec<i32>,
    pub text: String,
}
