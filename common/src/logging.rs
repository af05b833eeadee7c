use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use std::env;

// 会被单独调整日志级别的常见组件
const COMMON_COMPONENTS: [&str; 4] = ["twitter_client", "reqwest", "hyper", "h2"];

// 日志输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    // 普通文本格式
    Plain,
    // JSON格式，适合ELK等日志聚合系统
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Plain,
        }
    }
}

/// 从配置初始化日志系统
///
/// # 示例
/// ```no_run
/// use common::config::AppConfig;
/// use common::logging;
///
/// fn main() -> anyhow::Result<()> {
///     let config = AppConfig::new()?;
///     logging::init_from_config(&config)?;
///     Ok(())
/// }
/// ```
pub fn init_from_config(config: &crate::config::AppConfig) -> Result<()> {
    let filter_string = build_filter(
        &config.log.level,
        config
            .log
            .components
            .iter()
            .flatten()
            .map(|(component, level)| (component.as_str(), level.as_str())),
    );

    // 检查环境变量是否有覆盖设置
    let env_filter = if let Ok(env_filter) = env::var("RUST_LOG") {
        EnvFilter::new(env_filter)
    } else {
        EnvFilter::new(filter_string)
    };

    // 检查是否有组件特定的环境变量覆盖
    let env_filter = check_env_component_overrides(env_filter);

    // 确定日志格式
    let log_format = config
        .log
        .format
        .as_deref()
        .map(LogFormat::parse)
        .unwrap_or(LogFormat::Plain);

    // 根据配置的输出格式选择日志输出方式
    let result = match log_format {
        LogFormat::Plain => fmt()
            .with_env_filter(env_filter)
            .with_ansi(true)
            .with_thread_names(true)
            .try_init(),
        LogFormat::Json => fmt()
            .with_env_filter(env_filter)
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_thread_names(true)
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("日志系统初始化失败: {}", e))?;

    info!("日志系统从配置初始化成功，全局级别: {}", config.log.level);
    info!("日志格式: {:?}", log_format);

    if let Some(components) = &config.log.components {
        for (component, level) in components {
            info!("组件 {} 日志级别: {}", component, level);
        }
    }

    Ok(())
}

// 拼接过滤器字符串，例如 "info,reqwest=warn"
fn build_filter<'a>(global: &str, components: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut filter_parts = vec![global.to_string()];
    for (component, level) in components {
        filter_parts.push(format!("{}={}", component, level));
    }
    filter_parts.join(",")
}

/// 检查环境变量中是否有组件特定的日志级别覆盖
fn check_env_component_overrides(mut env_filter: EnvFilter) -> EnvFilter {
    for component in &COMMON_COMPONENTS {
        let env_var_name = format!("RUST_LOG_{}", component.to_uppercase());
        if let Ok(level) = env::var(&env_var_name) {
            // 尝试添加指令，如果解析失败则忽略
            if let Ok(directive) = format!("{}={}", component, level).parse() {
                env_filter = env_filter.add_directive(directive);
            }
        }
    }

    env_filter
}
