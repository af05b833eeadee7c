use serde::{Deserialize, Serialize};

use crate::converter::safe;

use super::Tweet;

/// Twitter用户
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub created_at: String,
    pub lang: Option<String>,
    pub protected: bool,
    pub verified: bool,
    pub followers_count: i64,
    pub friends_count: i64,
    pub listed_count: i64,
    pub favourites_count: i64,
    pub statuses_count: i64,
    pub profile_image_url_https: Option<String>,
    pub profile_banner_url: Option<String>,
    pub default_profile_image: bool,
    /// 最近一条推文，`skip_status` 时为空
    pub status: Option<Box<Tweet>>,
    #[serde(deserialize_with = "safe::list")]
    pub withheld_in_countries: Vec<String>,
}
