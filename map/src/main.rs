//! Store Map renderer
//!
//! Renders store feeds produced by the crawler into static Leaflet pages,
//! one page per dataset, with clustered markers and provider-link popups.
//! Uses hexagonal (ports & adapters) architecture: the feed source and the
//! map widget sit behind traits so the renderer can be tested in memory.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod popup;

#[cfg(test)]
mod test_utils;


use adapters::{FileFeedSource, HttpFeedSource, LeafletPage};
use app::{PopupPolicy, RenderOutcome, StoreFeedRenderer};
use config::Config;
use domain::entities::DatasetId;
use domain::ports::FeedSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storemap_map=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting store map renderer...");

    let config = Config::from_env();
    if config.datasets.is_empty() {
        bail!("No datasets configured (STOREMAP_DATASETS)");
    }

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    let failed = if config.feed_is_remote() {
        tracing::info!("Fetching feeds from {}", config.feed_base);
        let feed = HttpFeedSource::new(&config.feed_base, &config.revision, config.http_timeout)
            .context("Failed to build HTTP client")?;
        render_all(Arc::new(feed), &config).await?
    } else {
        let feed = FileFeedSource::new(&config.feed_base);
        tracing::info!("Reading feeds from {}", feed.dir().display());
        render_all(Arc::new(feed), &config).await?
    };

    if failed > 0 {
        bail!("{} of {} datasets failed to load", failed, config.datasets.len());
    }

    tracing::info!("Wrote {} pages to {}", config.datasets.len(), config.output_dir.display());
    Ok(())
}

/// Render every configured dataset; returns how many failed to load
async fn render_all<F: FeedSource>(feed: Arc<F>, config: &Config) -> Result<usize> {
    let mut failed = 0;

    for (i, dataset) in config.datasets.iter().enumerate() {
        let (page, loaded) = render_page(feed.clone(), config, dataset).await;
        if !loaded {
            failed += 1;
        }
        tracing::debug!(%dataset, markers = page.marker_count(), "Page ready");

        let html = page.render_html().context("Failed to serialize markers")?;
        let path = config.output_dir.join(format!("{}.html", dataset));
        write_page(&path, &html).await?;

        // The first dataset is the landing page
        if i == 0 {
            write_page(&config.output_dir.join("index.html"), &html).await?;
        }
    }

    Ok(failed)
}

/// Render one dataset into a page. A failed load still yields a page that
/// shows the unavailable notice.
async fn render_page<F: FeedSource>(
    feed: Arc<F>,
    config: &Config,
    dataset: &DatasetId,
) -> (LeafletPage, bool) {
    let page = LeafletPage::new(config.profile, &config.style_url, dataset.clone())
        .with_datasets(config.datasets.clone());
    let renderer =
        StoreFeedRenderer::new(feed, page, PopupPolicy::new(config.home_country.clone()));

    let loaded = match renderer.select_dataset(dataset.as_str()).await {
        Ok(RenderOutcome::Rendered { skipped, .. }) => {
            if skipped > 0 {
                tracing::warn!(%dataset, skipped, "Some store records were malformed");
            }
            true
        }
        Ok(RenderOutcome::Superseded { .. }) => true,
        Err(e) => {
            tracing::error!(%dataset, "Dataset unavailable: {}", e);
            false
        }
    };

    (renderer.into_surface(), loaded)
}

async fn write_page(path: &Path, html: &str) -> Result<()> {
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
