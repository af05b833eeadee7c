/// 定义绑定到 [`RestAdapter`](crate::transport::RestAdapter) 的服务类型
///
/// 生成服务结构体、`adapter()`/`base_url()` 访问器以及
/// [`ApiService`](crate::services::ApiService) 实现
///
/// 第三个参数可指定 [`Route`](crate::services::Route)，默认主API地址
///
/// ```ignore
/// twitter_service!(
///     /// 账户相关接口
///     AccountService, "account"
/// );
/// twitter_service!(MediaService, "media", Upload);
/// ```
macro_rules! twitter_service {
    ($(#[$meta:meta])* $service:ident, $name:expr) => {
        twitter_service!($(#[$meta])* $service, $name, Api);
    };
    ($(#[$meta:meta])* $service:ident, $name:expr, $route:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $service {
            adapter: ::std::sync::Arc<$crate::transport::RestAdapter>,
        }

        impl $service {
            /// 服务使用的适配器
            pub fn adapter(&self) -> &::std::sync::Arc<$crate::transport::RestAdapter> {
                &self.adapter
            }

            /// 请求的基础地址
            pub fn base_url(&self) -> &str {
                self.adapter.endpoint()
            }
        }

        impl $crate::services::ApiService for $service {
            const NAME: &'static str = $name;
            const ROUTE: $crate::services::Route = $crate::services::Route::$route;

            fn create(
                adapter: ::std::sync::Arc<$crate::transport::RestAdapter>,
            ) -> ::common::Result<Self> {
                Ok(Self { adapter })
            }
        }
    };
}
