//! Twitter REST API 客户端
//!
//! 入口是 [`TwitterApiClient`]：由会话和配置创建，按需构建各个服务并缓存。
//!
//! ```no_run
//! use twitter_client::{Session, TwitterApiClient};
//!
//! # async fn run() -> common::Result<()> {
//! common::config::ConfigLoader::init_global()?;
//! let client = TwitterApiClient::new(Some(Session::guest("bearer-token", None)))?;
//! let config = client.configuration_service()?.configuration().await?;
//! println!("{}", config.short_url_length_https);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod converter;
pub mod models;
pub mod registry;
pub mod services;
pub mod transport;

pub use auth::{AuthConfig, Session};
pub use converter::JsonConverter;
pub use registry::{RequestContext, TwitterApiClient};
pub use services::{ApiService, Route};
pub use transport::{RestAdapter, TwitterApi, UPLOAD_ENDPOINT};
