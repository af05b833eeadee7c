use serde::Serialize;

use common::Result;

use crate::models::{Followers, UserTweets};
use crate::transport::Params;

use super::UserTimelineQuery;

twitter_service!(
    /// 关注者与用户推文，结果可直接持久化
    FollowersService,
    "followers"
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct FollowersQuery {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    /// 从 -1 开始，之后使用返回的 `next_cursor`
    pub cursor: Option<i64>,
    pub count: Option<u32>,
    pub skip_status: Option<bool>,
    pub include_user_entities: Option<bool>,
}

impl FollowersService {
    pub async fn list(&self, query: &FollowersQuery) -> Result<Followers> {
        self.adapter
            .get("/1.1/followers/list.json", &Params::from_query(query)?)
            .await
    }

    pub async fn user_tweets(&self, query: &UserTimelineQuery) -> Result<UserTweets> {
        self.adapter
            .get("/1.1/statuses/user_timeline.json", &Params::from_query(query)?)
            .await
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
    async fn test_list_and_re_encode() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/1.1/followers/list.json")
                    .query_param("screen_name", "rustlang")
                    .query_param("cursor", "-1");
                then.status(200).json_body(json!({
                    "users": [
                        {"id": 3, "screen_name": "ferris", "status": {"id": 30, "text": "crab"}},
                        {"id": 1, "screen_name": "bors"}
                    ],
                    "next_cursor": 1,
                    "previous_cursor": 0
                }));
            })
            .await;

        let service = FollowersService::create(adapter(&server.base_url())).unwrap();
        let query = FollowersQuery {
            screen_name: Some("rustlang".to_string()),
            cursor: Some(-1),
            ..Default::default()
        };
        let followers = service.list(&query).await.unwrap();

        let names: Vec<&str> = followers.users.iter().map(|u| u.screen_name.as_str()).collect();
        assert_eq!(names, vec!["ferris", "bors"]);
        assert_eq!(followers.next_cursor, 1);

        // 用同一个转换器重新编码，顺序不变
        let converter = service.adapter().converter();
        let bytes = converter.encode(&followers).unwrap();
        let decoded: Followers = converter.decode(&bytes).unwrap();
        assert_eq!(decoded, followers);
    }

    #[tokio::test]
    async fn test_user_tweets() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/1.1/statuses/user_timeline.json")
                    .query_param("user_id", "12");
                then.status(200).json_body(json!([{"id": 5}, {"id": 4}, {"id": 3}]));
            })
            .await;

        let service = FollowersService::create(adapter(&server.base_url())).unwrap();
        let query = UserTimelineQuery {
            user_id: Some(12),
            ..Default::default()
        };
        let tweets = service.user_tweets(&query).await.unwrap();
        let ids: Vec<i64> = tweets.tweets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }
}
