//! Twitter API 服务
//!
//! 每个服务都是绑定到某个 [`RestAdapter`] 的轻量句柄，由
//! [`TwitterApiClient`](crate::TwitterApiClient) 按类型延迟创建并缓存。

#[macro_use]
mod macros;

mod account;
mod collection;
mod configuration;
mod favorite;
mod followers;
mod list;
mod media;
mod search;
mod statuses;

use std::sync::Arc;

use common::Result;

use crate::transport::RestAdapter;

pub use account::AccountService;
pub use collection::CollectionService;
pub use configuration::ConfigurationService;
pub use favorite::{FavoriteService, FavoritesQuery};
pub use followers::{FollowersQuery, FollowersService};
pub use list::{ListService, ListStatusesQuery};
pub use media::MediaService;
pub use search::{SearchQuery, SearchService};
pub use statuses::{StatusUpdate, StatusesService, TimelineQuery, UserTimelineQuery};

/// 服务请求发往的地址
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// 主API地址
    Api,
    /// 媒体上传地址
    Upload,
}

/// 服务工厂特征
///
/// 注册表只通过类型标识区分服务，按 [`ApiService::ROUTE`] 选择适配器创建新实例
pub trait ApiService: Send + Sync + Sized + 'static {
    /// 服务名称，用于日志
    const NAME: &'static str;

    /// 服务绑定的地址，同一类型始终使用同一个
    const ROUTE: Route = Route::Api;

    /// 创建新的服务实例
    fn create(adapter: Arc<RestAdapter>) -> Result<Self>;
}
