use async_trait::async_trait;
use scraper::Html;
use serde_json::Value;
use url::Url;

use crate::http::HttpClient;
use crate::model::EpisodeMetadata;

use super::page;
use super::{metadata_from_parts, Crawler};

/// Crawler for Pocket Casts episode share pages
///
/// The pages embed a schema.org `PodcastEpisode` JSON-LD block with the
/// episode name, an ISO-8601 duration and the enclosure behind
/// `associatedMedia.contentUrl`. OpenGraph tags serve as a title
/// fallback.
pub struct PocketCastsCrawler;

#[async_trait]
impl Crawler for PocketCastsCrawler {
    fn host(&self) -> &'static str {
        "pca.st"
    }

    async fn crawl(&self, http: &dyn HttpClient, url: &Url) -> Option<EpisodeMetadata> {
        let text = page::fetch_page(http, url).await?;
        let html = Html::parse_document(&text);

        let episode = page::json_ld_of_type(&html, "PodcastEpisode");
        let mut title = episode
            .as_ref()
            .and_then(|e| e.get("name"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        if title.is_none() {
            title = page::meta_content(&html, "og:title");
        }
        let duration = episode
            .as_ref()
            .and_then(|e| e.get("duration"))
            .and_then(Value::as_str)
            .and_then(page::parse_duration_seconds);
        let media_url = episode
            .as_ref()
            .and_then(|e| e.get("associatedMedia"))
            .and_then(|media| media.get("contentUrl"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        metadata_from_parts(title, duration, media_url)
    }
}
