use serde::Serialize;

use common::Result;

use crate::models::Search;
use crate::transport::Params;

twitter_service!(
    /// 推文搜索接口
    SearchService,
    "search"
);

/// `search/tweets.json` 的查询条件
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchQuery {
    pub q: String,
    pub geocode: Option<String>,
    pub lang: Option<String>,
    pub locale: Option<String>,
    /// mixed / recent / popular
    pub result_type: Option<String>,
    pub count: Option<u32>,
    pub until: Option<String>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub include_entities: Option<bool>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }
}

impl SearchService {
    pub async fn tweets(&self, query: &SearchQuery) -> Result<Search> {
        self.adapter
            .get("/1.1/search/tweets.json", &Params::from_query(query)?)
            .await
    }
}
