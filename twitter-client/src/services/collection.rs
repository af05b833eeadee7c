use common::Result;

use crate::models::TwitterCollection;
use crate::transport::Params;

twitter_service!(
    /// 推文合集接口
    CollectionService,
    "collection"
);

impl CollectionService {
    /// 按位置分页获取合集条目
    pub async fn entries(
        &self,
        id: &str,
        count: Option<u32>,
        max_position: Option<i64>,
        min_position: Option<i64>,
    ) -> Result<TwitterCollection> {
        let params = Params::new()
            .push("id", id)
            .push_opt("count", count)
            .push_opt("max_position", max_position)
            .push_opt("min_position", min_position);
        self.adapter
            .get("/1.1/collections/entries.json", &params)
            .await
    }
}
