use serde::{Deserialize, Serialize};

use crate::converter::safe;

use super::Tweet;

/// 搜索结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Search {
    #[serde(deserialize_with = "safe::list")]
    pub statuses: Vec<Tweet>,
    pub search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMetadata {
    pub max_id: i64,
    pub since_id: i64,
    pub refresh_url: Option<String>,
    pub next_results: Option<String>,
    pub count: i64,
    pub completed_in: f64,
    pub query: String,
}
