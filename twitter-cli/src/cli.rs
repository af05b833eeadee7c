use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Twitter API 命令行工具
#[derive(Debug, Parser)]
#[command(name = "twitter-cli", version, about)]
pub struct Cli {
    /// 配置文件路径，默认 ./config/config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 校验会话凭证
    Verify,
    /// 主页时间线
    Home {
        #[arg(short = 'n', long, default_value_t = 20)]
        count: u32,
    },
    /// 搜索推文
    Search {
        query: String,
        #[arg(short = 'n', long, default_value_t = 15)]
        count: u32,
    },
    /// 列出关注者
    Followers {
        screen_name: String,
        #[arg(long)]
        cursor: Option<i64>,
    },
    /// 服务端配置
    Configuration,
    /// 上传图片
    Upload { file: PathBuf },
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Verify => "verify",
            Command::Home { .. } => "home",
            Command::Search { .. } => "search",
            Command::Followers { .. } => "followers",
            Command::Configuration => "configuration",
            Command::Upload { .. } => "upload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["twitter-cli", "search", "#rustlang", "-n", "5"]).unwrap();
        match cli.command {
            Command::Search { query, count } => {
                assert_eq!(query, "#rustlang");
                assert_eq!(count, 5);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_config_and_defaults() {
        let cli = Cli::try_parse_from(["twitter-cli", "home", "--config", "dev.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("dev.toml"));
        assert!(matches!(cli.command, Command::Home { count: 20 }));
        assert_eq!(cli.command.label(), "home");
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["twitter-cli"]).is_err());
        assert!(Cli::try_parse_from(["twitter-cli", "followers"]).is_err());
    }
}
