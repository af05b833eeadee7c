use serde::Serialize;

use common::Result;

use crate::models::Tweet;
use crate::transport::Params;

twitter_service!(
    /// 列表接口
    ListService,
    "list"
);

/// 列表可通过 `list_id` 或 `slug` 加所有者指定
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListStatusesQuery {
    pub list_id: Option<i64>,
    pub slug: Option<String>,
    pub owner_screen_name: Option<String>,
    pub owner_id: Option<i64>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub count: Option<u32>,
    pub include_entities: Option<bool>,
    pub include_rts: Option<bool>,
}

impl ListService {
    /// 列表成员的推文时间线
    pub async fn statuses(&self, query: &ListStatusesQuery) -> Result<Vec<Tweet>> {
        self.adapter
            .get("/1.1/lists/statuses.json", &Params::from_query(query)?)
            .await
    }
}
