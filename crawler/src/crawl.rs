//! Crawl orchestration
//!
//! Walks every listing page of a game, one request at a time.

use crate::catalog::{Game, Region};
use crate::client::LocationClient;
use crate::parser::{LocationParser, Store};

pub struct Crawler {
    client: LocationClient,
    parser: LocationParser,
}

impl Crawler {
    pub fn new(client: LocationClient, parser: LocationParser) -> Self {
        Self { client, parser }
    }

    /// Crawl every region page of a game. Pages that fail are logged and skipped.
    pub async fn crawl_game(&self, game: Game) -> Vec<Store> {
        let mut stores = Vec::new();

        for region in Region::ALL {
            if !game.has_region(region) {
                continue;
            }

            for id in region.page_ids() {
                let Some(url) = game.page_url(region, id) else {
                    continue;
                };

                match self.client.fetch_page(&url).await {
                    Ok(html) => {
                        let found = self.parser.parse(&html, region);
                        tracing::debug!(%game, %region, id, count = found.len(), "Parsed page");
                        stores.extend(found);
                    }
                    Err(e) => {
                        tracing::warn!(%game, %region, id, "Failed to fetch page: {:#}", e);
                    }
                }
            }
        }

        tracing::info!(%game, count = stores.len(), "Crawled game");
        stores
    }
}
