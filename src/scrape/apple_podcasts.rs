use async_trait::async_trait;
use scraper::Html;
use serde_json::Value;
use url::Url;

use crate::http::HttpClient;
use crate::model::EpisodeMetadata;

use super::page;
use super::{metadata_from_parts, Crawler};

/// Crawler for Apple Podcasts (iTunes) episode pages
///
/// The store pages carry a schema.org JSON-LD block with the episode
/// name and ISO-8601 duration but no direct enclosure URL.
pub struct ApplePodcastsCrawler;

#[async_trait]
impl Crawler for ApplePodcastsCrawler {
    fn host(&self) -> &'static str {
        "itunes.apple.com"
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

        metadata_from_parts(title, duration, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockHttpClient;

    #[tokio::test]
    async fn extracts_name_and_duration() {
        let page = r#"<html><head>
            <script type="application/ld+json">
            {"@type": "PodcastEpisode", "name": "WWDC Special", "duration": "PT1H5M"}
            </script>
        </head></html>"#;
        let http = MockHttpClient::new().route("itunes.apple.com", page);
        let url = Url::parse("https://itunes.apple.com/de/podcast/x/id123?i=456").unwrap();

        let metadata = ApplePodcastsCrawler.crawl(&http, &url).await.unwrap();
        assert_eq!(metadata.title.as_deref(), Some("WWDC Special"));
        assert_eq!(metadata.duration, Some(3900));
        assert!(metadata.url.is_none());
    }

    #[tokio::test]
    async fn og_title_fallback() {
        let page = r#"<html><head><meta property="og:title" content="Store Title"/></head></html>"#;
        let http = MockHttpClient::new().route("itunes.apple.com", page);
        let url = Url::parse("https://itunes.apple.com/podcast/id1").unwrap();

        let metadata = ApplePodcastsCrawler.crawl(&http, &url).await.unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Store Title"));
    }

    #[tokio::test]
    async fn empty_page_yields_nothing() {
        let http = MockHttpClient::new().route("itunes.apple.com", "<html></html>");
        let url = Url::parse("https://itunes.apple.com/podcast/id1").unwrap();
        assert!(ApplePodcastsCrawler.crawl(&http, &url).await.is_none());
    }
}
