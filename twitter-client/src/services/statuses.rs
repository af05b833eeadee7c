use serde::Serialize;

use common::Result;

use crate::models::Tweet;
use crate::transport::Params;

twitter_service!(
    /// 推文读写接口
    StatusesService,
    "statuses"
);

/// 通用时间线分页参数
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimelineQuery {
    pub count: Option<u32>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub trim_user: Option<bool>,
    pub exclude_replies: Option<bool>,
    pub include_entities: Option<bool>,
    pub tweet_mode: Option<String>,
}

/// 指定用户的时间线参数
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserTimelineQuery {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub count: Option<u32>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub trim_user: Option<bool>,
    pub exclude_replies: Option<bool>,
    pub include_rts: Option<bool>,
    pub tweet_mode: Option<String>,
}

/// 发推参数
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusUpdate {
    pub status: String,
    pub in_reply_to_status_id: Option<i64>,
    pub possibly_sensitive: Option<bool>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub place_id: Option<String>,
    pub display_coordinates: Option<bool>,
    pub trim_user: Option<bool>,
    /// 先通过媒体上传获得的ID
    pub media_ids: Vec<String>,
}

impl StatusUpdate {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Default::default()
        }
    }
}

impl StatusesService {
    pub async fn mentions_timeline(&self, query: &TimelineQuery) -> Result<Vec<Tweet>> {
        self.timeline("/1.1/statuses/mentions_timeline.json", &Params::from_query(query)?)
            .await
    }

    pub async fn user_timeline(&self, query: &UserTimelineQuery) -> Result<Vec<Tweet>> {
        self.timeline("/1.1/statuses/user_timeline.json", &Params::from_query(query)?)
            .await
    }

    pub async fn home_timeline(&self, query: &TimelineQuery) -> Result<Vec<Tweet>> {
        self.timeline("/1.1/statuses/home_timeline.json", &Params::from_query(query)?)
            .await
    }

    pub async fn retweets_of_me(&self, query: &TimelineQuery) -> Result<Vec<Tweet>> {
        self.timeline("/1.1/statuses/retweets_of_me.json", &Params::from_query(query)?)
            .await
    }

    async fn timeline(&self, path: &str, params: &Params) -> Result<Vec<Tweet>> {
        self.adapter.get(path, params).await
    }

    pub async fn show(&self, id: i64, include_my_retweet: Option<bool>) -> Result<Tweet> {
        let params = Params::new()
            .push("id", id)
            .push_opt("include_my_retweet", include_my_retweet);
        self.adapter.get("/1.1/statuses/show.json", &params).await
    }

    /// 批量获取推文，每次最多100个ID
    pub async fn lookup(&self, ids: &[i64], include_entities: Option<bool>) -> Result<Vec<Tweet>> {
        let ids = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        let params = Params::new()
            .push("id", ids)
            .push_opt("include_entities", include_entities);
        self.adapter.get("/1.1/statuses/lookup.json", &params).await
    }

    pub async fn update(&self, update: &StatusUpdate) -> Result<Tweet> {
        self.adapter
            .post_form("/1.1/statuses/update.json", &Params::from_query(update)?)
            .await
    }

    pub async fn retweet(&self, id: i64, trim_user: Option<bool>) -> Result<Tweet> {
        self.post_by_id("retweet", id, trim_user).await
    }

    pub async fn unretweet(&self, id: i64, trim_user: Option<bool>) -> Result<Tweet> {
        self.post_by_id("unretweet", id, trim_user).await
    }

    pub async fn destroy(&self, id: i64, trim_user: Option<bool>) -> Result<Tweet> {
        self.post_by_id("destroy", id, trim_user).await
    }

    async fn post_by_id(&self, action: &str, id: i64, trim_user: Option<bool>) -> Result<Tweet> {
        let path = format!("/1.1/statuses/{}/{}.json", action, id);
        let params = Params::new().push_opt("trim_user", trim_user);
        self.adapter.post_form(&path, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::adapter;
    use crate::services::ApiService;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_home_timeline() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/1.1/statuses/home_timeline.json")
                    .query_param("count", "2")
                    .query_param("tweet_mode", "extended");
                then.status(200).json_body(json!([
                    {"id": 2, "full_text": "second", "entities": null},
                    {"id": 1, "full_text": "first"}
                ]));
            })
            .await;

        let service = StatusesService::create(adapter(&server.base_url())).unwrap();
        let query = TimelineQuery {
            count: Some(2),
            tweet_mode: Some("extended".to_string()),
            ..Default::default()
        };
        let tweets = service.home_timeline(&query).await.unwrap();

        mock.assert_async().await;
        let texts: Vec<&str> = tweets.iter().map(Tweet::display_text).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_null_timeline_is_empty() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/1.1/statuses/user_timeline.json");
                then.status(200).body("null");
            })
            .await;

        let service = StatusesService::create(adapter(&server.base_url())).unwrap();
        let tweets = service
            .user_timeline(&UserTimelineQuery::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(tweets.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_joins_ids() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/1.1/statuses/lookup.json")
                    .query_param("id", "20,432656548536401920");
                then.status(200).json_body(json!([{"id": 20}, {"id": 432656548536401920i64}]));
            })
            .await;

        let service = StatusesService::create(adapter(&server.base_url())).unwrap();
        let tweets = service.lookup(&[20, 432656548536401920], None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(tweets.len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_retweet() {
        let server = MockServer::start_async().await;
        let update = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/1.1/statuses/update.json")
                    .body_includes("status=hello%20rust")
                    .body_includes("media_ids=1%2C2");
                then.status(200).json_body(json!({"id": 99, "text": "hello rust"}));
            })
            .await;
        let retweet = server
            .mock_async(|when, then| {
                when.method(POST).path("/1.1/statuses/retweet/99.json");
                then.status(200)
                    .json_body(json!({"id": 100, "retweeted_status": {"id": 99}}));
            })
            .await;

        let service = StatusesService::create(adapter(&server.base_url())).unwrap();
        let status = StatusUpdate {
            media_ids: vec!["1".to_string(), "2".to_string()],
            ..StatusUpdate::new("hello rust")
        };
        let tweet = service.update(&status).await.unwrap();
        let retweeted = service.retweet(tweet.id, None).await.unwrap();

        update.assert_async().await;
        retweet.assert_async().await;
        assert_eq!(retweeted.retweeted_status.map(|t| t.id), Some(99));
    }
}
