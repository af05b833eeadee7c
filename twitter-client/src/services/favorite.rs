use serde::Serialize;

use common::Result;

use crate::models::Tweet;
use crate::transport::Params;

twitter_service!(
    /// 喜欢（收藏）接口
    FavoriteService,
    "favorite"
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct FavoritesQuery {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub count: Option<u32>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub include_entities: Option<bool>,
}

impl FavoriteService {
    /// 用户最近喜欢的推文，未指定用户时为当前用户
    pub async fn list(&self, query: &FavoritesQuery) -> Result<Vec<Tweet>> {
        self.adapter
            .get("/1.1/favorites/list.json", &Params::from_query(query)?)
            .await
    }

    pub async fn create(&self, id: i64, include_entities: Option<bool>) -> Result<Tweet> {
        let params = Params::new()
            .push("id", id)
            .push_opt("include_entities", include_entities);
        self.adapter
            .post_form("/1.1/favorites/create.json", &params)
            .await
    }

    pub async fn destroy(&self, id: i64, include_entities: Option<bool>) -> Result<Tweet> {
        let params = Params::new()
            .push("id", id)
            .push_opt("include_entities", include_entities);
        self.adapter
            .post_form("/1.1/favorites/destroy.json", &params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::adapter;
    use crate::services::ApiService;
    use common::Error;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_and_create() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/1.1/favorites/list.json")
                    .query_param("screen_name", "rustlang");
                then.status(200).json_body(json!([{"id": 1, "favorited": true}]));
            })
            .await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/1.1/favorites/create.json")
                    .body("id=243138128959913986");
                then.status(200)
                    .json_body(json!({"id": 243138128959913986i64, "favorited": true}));
            })
            .await;

        let service = <FavoriteService as ApiService>::create(adapter(&server.base_url())).unwrap();
        let query = FavoritesQuery {
            screen_name: Some("rustlang".to_string()),
            ..Default::default()
        };
        let favorites = service.list(&query).await.unwrap();
        assert!(favorites[0].favorited);

        let tweet = service.create(243138128959913986, None).await.unwrap();
        create.assert_async().await;
        assert!(tweet.favorited);
    }

    #[tokio::test]
    async fn test_destroy_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/1.1/favorites/destroy.json");
                then.status(404).json_body(json!({
                    "errors": [{"code": 144, "message": "No status found with that ID."}]
                }));
            })
            .await;

        let service = <FavoriteService as ApiService>::create(adapter(&server.base_url())).unwrap();
        let error = service.destroy(1, Some(false)).await.unwrap_err();
        assert_eq!(error.api_code(), Some(144));
        assert!(matches!(error, Error::Api { status: 404, .. }));
    }
}
