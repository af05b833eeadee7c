use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use common::config::ConfigLoader;
use twitter_client::services::{FollowersQuery, SearchQuery, TimelineQuery};
use twitter_client::{JsonConverter, Session, TwitterApiClient};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // 初始化全局配置
    let config = ConfigLoader::init_global_from(cli.config.as_deref())?;
    common::logging::init_from_config(&config)?;

    let session_config = config
        .session
        .as_ref()
        .ok_or_else(|| anyhow!("配置中缺少 session 部分"))?;
    let session = Session::from_config(session_config)?;
    let client = TwitterApiClient::new(Some(session))?;
    info!("执行命令: {}", cli.command.label());

    let converter = client.api_adapter().converter().clone();
    match cli.command {
        Command::Verify => {
            let user = client
                .account_service()?
                .verify_credentials(None, Some(true), None)
                .await?;
            print_json(&converter, &user)
        }
        Command::Home { count } => {
            let query = TimelineQuery {
                count: Some(count),
                tweet_mode: Some("extended".to_string()),
                ..Default::default()
            };
            let tweets = client.statuses_service()?.home_timeline(&query).await?;
            print_json(&converter, &tweets)
        }
        Command::Search { query, count } => {
            let query = SearchQuery {
                count: Some(count),
                ..SearchQuery::new(query)
            };
            let search = client.search_service()?.tweets(&query).await?;
            print_json(&converter, &search)
        }
        Command::Followers { screen_name, cursor } => {
            let query = FollowersQuery {
                screen_name: Some(screen_name),
                cursor: Some(cursor.unwrap_or(-1)),
                ..Default::default()
            };
            let followers = client.followers_service()?.list(&query).await?;
            print_json(&converter, &followers)
        }
        Command::Configuration => {
            let configuration = client.configuration_service()?.configuration().await?;
            print_json(&converter, &configuration)
        }
        Command::Upload { file } => {
            let media = client.media_service()?.upload_file(&file).await?;
            print_json(&converter, &media)
        }
    }
}

fn print_json<T: Serialize + 'static>(converter: &JsonConverter, value: &T) -> Result<()> {
    let json = converter.to_value(value)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
