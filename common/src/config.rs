use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use tracing::info;
use crate::configs::{ApiConfig, AuthConfig, LogConfig, SessionConfig, TlsConfig, DEFAULT_BASE_HOST_URL};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "./config/config.yaml";

/// 环境变量前缀，例如 `TWITTER__AUTH__CONSUMER_KEY`
const ENV_PREFIX: &str = "TWITTER";

// 定义一个静态全局配置，可以在任何地方访问
pub static GLOBAL_CONFIG: Lazy<RwLock<Option<Arc<AppConfig>>>> = Lazy::new(|| RwLock::new(None));

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub session: Option<SessionConfig>,
    pub tls: TlsConfig,
    pub log: LogConfig,
}

impl AppConfig {
    // 从默认配置文件加载
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file(None)
    }

    // 从多个来源加载配置
    pub fn from_file(file_path: Option<&str>) -> Result<Self, ConfigError> {
        // 开始构建配置，先写入默认值
        let defaults = ApiConfig::default();
        let mut builder = Config::builder()
            .set_default("api.base_host_url", DEFAULT_BASE_HOST_URL)?
            .set_default("api.timeout_secs", defaults.timeout_secs)?
            .set_default("api.user_agent", defaults.user_agent)?
            .set_default("tls.https_only", true)?
            .set_default("log.level", "info")?;

        // 配置文件
        let path = file_path.unwrap_or(DEFAULT_CONFIG_PATH);
        if Path::new(path).exists() {
            builder = builder.add_source(File::from(Path::new(path)).format(Self::format_of(path)));
        } else if file_path.is_some() {
            return Err(ConfigError::NotFound(path.to_string()));
        }

        // 读取环境变量 (最高优先级)
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        // 构建配置
        let config = builder.build()?;

        // 转换为AppConfig结构体
        config.try_deserialize()
    }

    // 根据扩展名判断文件格式
    fn format_of(path: &str) -> FileFormat {
        if path.ends_with(".json") {
            FileFormat::Json
        } else if path.ends_with(".yaml") || path.ends_with(".yml") {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        }
    }
}

/// 全局配置单例
pub struct ConfigLoader;

impl ConfigLoader {
    // 从默认路径初始化全局配置单例
    pub fn init_global() -> Result<Arc<AppConfig>, ConfigError> {
        Self::init_global_from(None)
    }

    // 从指定路径初始化全局配置单例
    pub fn init_global_from(file_path: Option<&str>) -> Result<Arc<AppConfig>, ConfigError> {
        let config = Arc::new(AppConfig::from_file(file_path)?);
        Self::store(config.clone());
        info!("全局配置已加载: {}", file_path.unwrap_or(DEFAULT_CONFIG_PATH));
        Ok(config)
    }

    // 获取全局配置单例
    pub fn get_global() -> Option<Arc<AppConfig>> {
        match GLOBAL_CONFIG.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    // 设置新的全局配置
    pub fn set_global(config: AppConfig) {
        Self::store(Arc::new(config));
    }

    fn store(config: Arc<AppConfig>) {
        let mut guard = match GLOBAL_CONFIG.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(config);
    }
}
