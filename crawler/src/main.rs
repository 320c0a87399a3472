//! Store map crawler
//!
//! Crawls the arcade location service into one JSON dataset per game and
//! derives the `duplicate` dataset of stores carrying every game.
//! The map renderer reads the files this writes.

mod catalog;
mod client;
mod crawl;
mod duplicates;
mod overrides;
mod parser;
mod store_file;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use catalog::Game;
use client::LocationClient;
use crawl::Crawler;
use parser::LocationParser;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Crawl every game into json/<game>.json
    Crawl,
    /// Derive json/duplicate.json from existing game files
    Dupes,
}

struct Config {
    json_dir: PathBuf,
    timeout: Duration,
}

impl Config {
    fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let timeout = std::env::var("STOREMAP_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            json_dir: std::env::var("STOREMAP_JSON_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./json")),
            timeout: Duration::from_secs(timeout),
        }
    }

    fn dataset_path(&self, name: &str) -> PathBuf {
        self.json_dir.join(format!("{}.json", name))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storemap_crawler=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    tokio::fs::create_dir_all(&config.json_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.json_dir.display()))?;

    match cli.command {
        Some(Command::Crawl) => crawl_all(&config).await?,
        Some(Command::Dupes) => write_duplicates(&config).await?,
        None => {
            crawl_all(&config).await?;
            write_duplicates(&config).await?;
        }
    }

    Ok(())
}

async fn crawl_all(config: &Config) -> Result<()> {
    tracing::info!("Starting crawl into {}", config.json_dir.display());

    let client = LocationClient::new(config.timeout)?;
    let parser = LocationParser::new().context("Failed to compile location patterns")?;
    let crawler = Crawler::new(client, parser);

    for game in Game::ALL {
        let stores = crawler.crawl_game(game).await;
        store_file::save(&config.dataset_path(game.name()), &stores).await?;
    }

    Ok(())
}

async fn write_duplicates(config: &Config) -> Result<()> {
    let mut stores = HashMap::new();
    for game in Game::ALL {
        stores.insert(game, store_file::load(&config.dataset_path(game.name())).await?);
    }

    let duplicates = duplicates::find_duplicates(&stores);
    store_file::save(&config.dataset_path("duplicate"), &duplicates).await
}
