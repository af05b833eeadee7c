//! 服务注册表
//!
//! [`TwitterApiClient`] 持有两个适配器（主API和媒体上传）以及按服务类型索引的缓存。
//! 每种服务最多创建一次，之后所有调用方拿到同一个 `Arc`。

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tokio::runtime::Handle;
use tracing::{debug, info};

use common::config::{AppConfig, ConfigLoader};
use common::configs::AuthConfig;
use common::{Error, Result};

use crate::auth::Session;
use crate::converter::JsonConverter;
use crate::services::{
    AccountService, ApiService, CollectionService, ConfigurationService, FavoriteService,
    FollowersService, ListService, MediaService, Route, SearchService, StatusesService,
};
use crate::transport::{AuthenticatedClient, RestAdapter, TransportSecurity, TwitterApi, UPLOAD_ENDPOINT};

type ServiceSlot = Arc<OnceCell<Arc<dyn Any + Send + Sync>>>;

/// 创建客户端所需的全部参数
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub auth_config: AuthConfig,
    pub session: Option<Session>,
    pub api: TwitterApi,
    pub transport_security: TransportSecurity,
    /// 异步回调使用的执行器
    pub executor: Handle,
}

impl RequestContext {
    /// 使用默认API地址和传输设置
    pub fn new(auth_config: AuthConfig, session: Option<Session>, executor: Handle) -> Self {
        Self {
            auth_config,
            session,
            api: TwitterApi::default(),
            transport_security: TransportSecurity::default(),
            executor,
        }
    }

    pub fn from_config(config: &AppConfig, session: Option<Session>, executor: Handle) -> Self {
        Self {
            auth_config: config.auth.clone(),
            session,
            api: TwitterApi::from_config(&config.api),
            transport_security: TransportSecurity::from_config(&config.tls, &config.api),
            executor,
        }
    }
}

/// Twitter API客户端，按需创建并缓存各个服务
pub struct TwitterApiClient {
    session: Session,
    api_adapter: Arc<RestAdapter>,
    upload_adapter: Arc<RestAdapter>,
    services: DashMap<TypeId, ServiceSlot>,
}

impl fmt::Debug for TwitterApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterApiClient")
            .field("session_id", &self.session.id())
            .field("api_adapter", &self.api_adapter)
            .field("upload_adapter", &self.upload_adapter)
            .field("cached_services", &self.services.len())
            .finish()
    }
}

impl TwitterApiClient {
    /// 使用全局配置和当前tokio运行时创建客户端
    pub fn new(session: Option<Session>) -> Result<Self> {
        let config = ConfigLoader::get_global()
            .ok_or_else(|| Error::Internal("全局配置未初始化".to_string()))?;
        let executor = Handle::try_current()
            .map_err(|e| Error::Internal(format!("没有可用的tokio运行时: {}", e)))?;
        Self::with_context(RequestContext::from_config(&config, session, executor))
    }

    /// 会话为空时返回 [`Error::InvalidArgument`]，不进行任何网络请求
    pub fn with_context(context: RequestContext) -> Result<Self> {
        let RequestContext {
            auth_config,
            session,
            api,
            transport_security,
            executor,
        } = context;
        let session = session.ok_or_else(|| Error::InvalidArgument("Session must not be null".to_string()))?;

        let converter = Arc::new(JsonConverter::twitter());
        let build = |endpoint: &str| -> Result<Arc<RestAdapter>> {
            let client = AuthenticatedClient::new(auth_config.clone(), session.clone(), &transport_security)?;
            let adapter = RestAdapter::builder()
                .endpoint(endpoint)
                .client(client)
                .converter(converter.clone())
                .executor(executor.clone())
                .build()?;
            Ok(Arc::new(adapter))
        };

        let api_adapter = build(api.base_host_url())?;
        let upload_adapter = build(UPLOAD_ENDPOINT)?;
        info!(
            "Twitter客户端已创建: session={}, api={}, upload={}",
            session.id(),
            api_adapter.endpoint(),
            upload_adapter.endpoint()
        );

        Ok(Self {
            session,
            api_adapter,
            upload_adapter,
            services: DashMap::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api_adapter(&self) -> &Arc<RestAdapter> {
        &self.api_adapter
    }

    pub fn upload_adapter(&self) -> &Arc<RestAdapter> {
        &self.upload_adapter
    }

    /// 获取或创建类型 `T` 的服务，适配器由 [`ApiService::ROUTE`] 决定
    ///
    /// 创建失败时错误原样返回，槽位保持为空，下次调用会重试。
    pub fn service<T: ApiService>(&self) -> Result<Arc<T>> {
        let adapter = match T::ROUTE {
            Route::Api => &self.api_adapter,
            Route::Upload => &self.upload_adapter,
        };
        self.adapter_service(adapter)
    }

    // 缓存只按类型区分，调用方必须传入 `T::ROUTE` 对应的适配器
    fn adapter_service<T: ApiService>(&self, adapter: &Arc<RestAdapter>) -> Result<Arc<T>> {
        let key = TypeId::of::<T>();

        // 分片锁只在取出或放入槽位时持有，不覆盖并发放入的槽位
        let existing = self.services.get(&key).map(|slot| slot.value().clone());
        let slot = match existing {
            Some(slot) => slot,
            None => self.services.entry(key).or_default().value().clone(),
        };

        let service = slot.get_or_try_init(|| {
            debug!("创建服务: {} ({})", T::NAME, adapter.endpoint());
            T::create(adapter.clone()).map(|service| Arc::new(service) as Arc<dyn Any + Send + Sync>)
        })?;

        service
            .clone()
            .downcast::<T>()
            .map_err(|_| Error::Internal(format!("服务缓存类型不匹配: {}", T::NAME)))
    }

    pub fn account_service(&self) -> Result<Arc<AccountService>> {
        self.service()
    }

    pub fn favorite_service(&self) -> Result<Arc<FavoriteService>> {
        self.service()
    }

    pub fn statuses_service(&self) -> Result<Arc<StatusesService>> {
        self.service()
    }

    pub fn search_service(&self) -> Result<Arc<SearchService>> {
        self.service()
    }

    pub fn list_service(&self) -> Result<Arc<ListService>> {
        self.service()
    }

    pub fn collection_service(&self) -> Result<Arc<CollectionService>> {
        self.service()
    }

    pub fn configuration_service(&self) -> Result<Arc<ConfigurationService>> {
        self.service()
    }

    pub fn followers_service(&self) -> Result<Arc<FollowersService>> {
        self.service()
    }

    /// 媒体服务使用上传地址
    pub fn media_service(&self) -> Result<Arc<MediaService>> {
        self.service()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    use common::configs::{ApiConfig, LogConfig, TlsConfig};
    use httpmock::prelude::*;
    use serde_json::json;

    fn context(session: Option<Session>) -> RequestContext {
        RequestContext::new(AuthConfig::new("ck", "cs"), session, Handle::current())
    }

    fn client() -> TwitterApiClient {
        TwitterApiClient::with_context(context(Some(Session::user(1, "jack", "t", "s")))).unwrap()
    }

    #[tokio::test]
    async fn test_missing_session_is_invalid_argument() {
        let result = TwitterApiClient::with_context(context(None));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_accessors_return_same_instance() {
        let client = client();

        let first = client.account_service().unwrap();
        let second = client.account_service().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let generic = client.service::<AccountService>().unwrap();
        assert!(Arc::ptr_eq(&first, &generic));

        assert!(Arc::ptr_eq(
            &client.statuses_service().unwrap(),
            &client.statuses_service().unwrap()
        ));
        assert!(Arc::ptr_eq(
            &client.media_service().unwrap(),
            &client.media_service().unwrap()
        ));
    }

    #[tokio::test]
    async fn test_services_routed_to_adapters() {
        let mut ctx = context(Some(Session::guest("AAAA", None)));
        ctx.api = TwitterApi::new("https://api.example.com");
        let client = TwitterApiClient::with_context(ctx).unwrap();

        assert_eq!(client.media_service().unwrap().base_url(), UPLOAD_ENDPOINT);
        assert_eq!(client.account_service().unwrap().base_url(), "https://api.example.com");
        assert_eq!(client.favorite_service().unwrap().base_url(), "https://api.example.com");
        assert_eq!(client.statuses_service().unwrap().base_url(), "https://api.example.com");
        assert_eq!(client.search_service().unwrap().base_url(), "https://api.example.com");
        assert_eq!(client.list_service().unwrap().base_url(), "https://api.example.com");
        assert_eq!(client.collection_service().unwrap().base_url(), "https://api.example.com");
        assert_eq!(client.configuration_service().unwrap().base_url(), "https://api.example.com");
        assert_eq!(client.followers_service().unwrap().base_url(), "https://api.example.com");
    }

    #[tokio::test]
    async fn test_media_route_fixed_by_type() {
        let client = client();

        // 通过泛型入口先取媒体服务，仍然绑定上传地址
        let generic = client.service::<MediaService>().unwrap();
        assert_eq!(generic.base_url(), UPLOAD_ENDPOINT);
        let accessor = client.media_service().unwrap();
        assert_eq!(accessor.base_url(), UPLOAD_ENDPOINT);
        assert!(Arc::ptr_eq(&generic, &accessor));

        assert_eq!(MediaService::ROUTE, Route::Upload);
        assert_eq!(AccountService::ROUTE, Route::Api);
        assert_eq!(client.service::<AccountService>().unwrap().base_url(), "https://api.twitter.com");
    }

    #[tokio::test]
    async fn test_adapters_share_converter() {
        let client = client();
        assert!(Arc::ptr_eq(
            client.api_adapter().converter(),
            client.upload_adapter().converter()
        ));
        assert!(!Arc::ptr_eq(client.api_adapter(), client.upload_adapter()));
    }

    static COUNTED_CREATIONS: AtomicUsize = AtomicUsize::new(0);

    struct CountedService;

    impl ApiService for CountedService {
        const NAME: &'static str = "counted";

        fn create(_adapter: Arc<RestAdapter>) -> Result<Self> {
            COUNTED_CREATIONS.fetch_add(1, Ordering::SeqCst);
            // 拉长创建时间，让并发调用方都落在初始化窗口内
            std::thread::sleep(Duration::from_millis(50));
            Ok(CountedService)
        }
    }

    #[tokio::test]
    async fn test_concurrent_first_access_creates_once() {
        let client = client();

        let services: Vec<Arc<CountedService>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| client.service::<CountedService>().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(COUNTED_CREATIONS.load(Ordering::SeqCst), 1);
        assert!(services.iter().all(|s| Arc::ptr_eq(s, &services[0])));
    }

    static SLOW_STARTED: AtomicBool = AtomicBool::new(false);
    static SLOW_RELEASE: AtomicBool = AtomicBool::new(false);

    struct SlowService;

    impl ApiService for SlowService {
        const NAME: &'static str = "slow";

        fn create(_adapter: Arc<RestAdapter>) -> Result<Self> {
            SLOW_STARTED.store(true, Ordering::SeqCst);
            let deadline = Instant::now() + Duration::from_secs(5);
            while !SLOW_RELEASE.load(Ordering::SeqCst) {
                if Instant::now() > deadline {
                    return Err(Error::ServiceCreation("未被释放".to_string()));
                }
                std::thread::sleep(Duration::from_millis(1));
            }
            Ok(SlowService)
        }
    }

    struct FastService;

    impl ApiService for FastService {
        const NAME: &'static str = "fast";

        fn create(_adapter: Arc<RestAdapter>) -> Result<Self> {
            Ok(FastService)
        }
    }

    #[tokio::test]
    async fn test_different_services_do_not_block() {
        let client = client();

        std::thread::scope(|scope| {
            let slow = scope.spawn(|| client.service::<SlowService>());
            while !SLOW_STARTED.load(Ordering::SeqCst) {
                std::thread::yield_now();
            }

            // 慢服务仍在创建中
            assert!(client.service::<FastService>().is_ok());
            assert!(!SLOW_RELEASE.load(Ordering::SeqCst));

            SLOW_RELEASE.store(true, Ordering::SeqCst);
            assert!(slow.join().unwrap().is_ok());
        });
    }

    static FLAKY_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    struct FlakyService;

    impl ApiService for FlakyService {
        const NAME: &'static str = "flaky";

        fn create(_adapter: Arc<RestAdapter>) -> Result<Self> {
            if FLAKY_ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(Error::ServiceCreation("first attempt fails".to_string()));
            }
            Ok(FlakyService)
        }
    }

    #[tokio::test]
    async fn test_failed_creation_is_not_cached() {
        let client = client();

        match client.service::<FlakyService>() {
            Err(Error::ServiceCreation(message)) => assert_eq!(message, "first attempt fails"),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }

        let second = client.service::<FlakyService>().unwrap();
        let third = client.service::<FlakyService>().unwrap();
        assert!(Arc::ptr_eq(&second, &third));
        assert_eq!(FLAKY_ATTEMPTS.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_new_uses_global_config() {
        ConfigLoader::set_global(AppConfig {
            api: ApiConfig {
                base_host_url: "https://api.example.org/".to_string(),
                ..ApiConfig::default()
            },
            auth: AuthConfig::new("global-ck", "global-cs"),
            session: None,
            tls: TlsConfig::default(),
            log: LogConfig::default(),
        });

        let client = TwitterApiClient::new(Some(Session::guest("AAAA", None))).unwrap();
        assert_eq!(client.api_adapter().endpoint(), "https://api.example.org");
        assert_eq!(client.account_service().unwrap().base_url(), "https://api.example.org");
        assert_eq!(client.media_service().unwrap().base_url(), UPLOAD_ENDPOINT);

        assert!(matches!(TwitterApiClient::new(None), Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_end_to_end_through_registry() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/1.1/account/verify_credentials.json")
                    .header_exists("authorization");
                then.status(200).json_body(json!({"id": 1, "screen_name": "jack"}));
            })
            .await;

        let mut ctx = context(Some(Session::user(1, "jack", "t", "s")));
        ctx.api = TwitterApi::new(server.base_url());
        ctx.transport_security = TransportSecurity::insecure_for_testing();
        let client = TwitterApiClient::with_context(ctx).unwrap();

        let user = client
            .account_service()
            .unwrap()
            .verify_credentials(None, None, None)
            .await
            .unwrap();
        assert_eq!(user.screen_name, "jack");
    }
}
