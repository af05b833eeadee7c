use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::converter::safe;

use super::{Tweet, User};

/// `collections/entries.json` 的返回值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCollection {
    #[serde(rename = "objects")]
    pub contents: TwitterCollectionContent,
    #[serde(rename = "response")]
    pub metadata: TwitterCollectionMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCollectionContent {
    #[serde(rename = "tweets", deserialize_with = "safe::map")]
    pub tweet_map: HashMap<String, Tweet>,
    #[serde(rename = "users", deserialize_with = "safe::map")]
    pub user_map: HashMap<String, User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCollectionMetadata {
    pub timeline_id: String,
    pub position: Position,
    #[serde(rename = "timeline", deserialize_with = "safe::list")]
    pub timeline_items: Vec<TimelineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub max_position: Option<i64>,
    pub min_position: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineItem {
    pub tweet: TweetItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetItem {
    pub id: i64,
}

impl TwitterCollection {
    /// 按时间线顺序返回推文，缺失的条目跳过
    pub fn ordered_tweets(&self) -> Vec<&Tweet> {
        self.metadata
            .timeline_items
            .iter()
            .filter_map(|item| self.contents.tweet_map.get(&item.tweet.id.to_string()))
            .collect()
    }
}
