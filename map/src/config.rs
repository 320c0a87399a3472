use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::app::map_config::{DEFAULT_REVISION, DEFAULT_STYLE_URL};
use crate::app::MapProfile;
use crate::domain::entities::{CountryCode, DatasetId};

const DEFAULT_DATASETS: &str = "duplicate,ongeki,chunithm,maimai";

#[derive(Clone, Debug)]
pub struct Config {
    /// URL or directory holding `<dataset>.json`
    pub feed_base: String,
    /// Cache-busting query value for HTTP feeds
    pub revision: String,
    pub home_country: CountryCode,
    pub profile: MapProfile,
    /// Vector style URL, only used by the vector profile
    pub style_url: String,
    /// Datasets rendered, in switcher order
    pub datasets: Vec<DatasetId>,
    pub output_dir: PathBuf,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            feed_base: env::var("STOREMAP_FEED_BASE").unwrap_or_else(|_| "./json".to_string()),
            revision: env::var("STOREMAP_REVISION")
                .unwrap_or_else(|_| DEFAULT_REVISION.to_string()),
            home_country: parse_or_default("STOREMAP_HOME_COUNTRY", CountryCode::new("JP")),
            profile: parse_or_default("STOREMAP_PROFILE", MapProfile::default()),
            style_url: env::var("STOREMAP_STYLE_URL")
                .unwrap_or_else(|_| DEFAULT_STYLE_URL.to_string()),
            datasets: parse_datasets(
                &env::var("STOREMAP_DATASETS").unwrap_or_else(|_| DEFAULT_DATASETS.to_string()),
            ),
            output_dir: env::var("STOREMAP_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./dist")),
            http_timeout: Duration::from_secs(parse_or_default(
                "STOREMAP_HTTP_TIMEOUT_SECS",
                30u64,
            )),
        }
    }

    /// Whether feeds are fetched over HTTP rather than read from disk
    pub fn feed_is_remote(&self) -> bool {
        self.feed_base.starts_with("http://") || self.feed_base.starts_with("https://")
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
            default
        }),
        Err(_) => default,
    }
}

/// Parse a comma-separated dataset list, dropping invalid entries
fn parse_datasets(raw: &str) -> Vec<DatasetId> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| match s.parse::<DatasetId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("Ignoring dataset {:?}: {}", s, e);
                None
            }
        })
        .collect()
}
