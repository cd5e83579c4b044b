use reqwest::Client;
use scraper::Html;
use tracing::info;

use crate::config::Config;
use crate::error::ScrapeError;
use crate::parsers::extract_rewards;
use crate::types::{LotteryKind, Reward};

/// One blocking-equivalent fetch-and-parse round trip: GET the configured
/// source page for the kind, then walk its DOM. No caching, no retries.
pub async fn scrape_results(
    client: &Client,
    config: &Config,
    kind: LotteryKind,
) -> Result<Vec<Reward>, ScrapeError> {
    let url = config
        .source_url(kind)
        .ok_or(ScrapeError::MissingSourceUrl(kind.as_str()))?;

    info!("visiting {url}");

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    // Html is not Send; parse and drop it without crossing an await point.
    let doc = Html::parse_document(&body);
    extract_rewards(kind, &doc)
}
