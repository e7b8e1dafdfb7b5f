use async_trait::async_trait;
use scraper::Html;
use serde_json::Value;
use url::Url;

use crate::http::HttpClient;
use crate::model::EpisodeMetadata;

use super::page;
use super::{metadata_from_parts, Crawler};

/// Crawler for Castro episode share pages
///
/// Castro pages serve OpenGraph tags plus an inline `<audio>` player;
/// newer pages also carry a JSON-LD episode block with the duration.
pub struct CastroCrawler;

#[async_trait]
impl Crawler for CastroCrawler {
    fn host(&self) -> &'static str {
        "castro.fm"
    }

    async fn crawl(&self, http: &dyn HttpClient, url: &Url) -> Option<EpisodeMetadata> {
        let text = page::fetch_page(http, url).await?;
        let html = Html::parse_document(&text);

        let episode = page::json_ld_of_type(&html, "PodcastEpisode");
        let title = page::meta_content(&html, "og:title").or_else(|| {
            episode
                .as_ref()
                .and_then(|e| e.get("name"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        });
        let duration = episode
            .as_ref()
            .and_then(|e| e.get("duration"))
            .and_then(Value::as_str)
            .and_then(page::parse_duration_seconds);
        let media_url = page::element_attr(&html, "audio source", "src")
            .or_else(|| page::meta_content(&html, "og:audio"));

        metadata_from_parts(title, duration, media_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockHttpClient;

    #[tokio::test]
    async fn extracts_opengraph_and_audio() {
        let page = r#"<html><head>
            <meta property="og:title" content="Accidental Tech Podcast: 300"/>
            <script type="application/ld+json">
            {"@type": "PodcastEpisode", "duration": "PT2H0M0S"}
            </script>
        </head><body>
            <audio><source src="https://example.com/atp300.mp3"/></audio>
        </body></html>"#;
        let http = MockHttpClient::new().route("castro.fm", page);
        let url = Url::parse("https://castro.fm/episode/xyz").unwrap();

        let metadata = CastroCrawler.crawl(&http, &url).await.unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Accidental Tech Podcast: 300"));
        assert_eq!(metadata.duration, Some(7200));
        assert_eq!(metadata.url.as_deref(), Some("https://example.com/atp300.mp3"));
    }

    #[tokio::test]
    async fn empty_page_yields_nothing() {
        let http = MockHttpClient::new().route("castro.fm", "<html></html>");
        let url = Url::parse("https://castro.fm/episode/xyz").unwrap();
        assert!(CastroCrawler.crawl(&http, &url).await.is_none());
    }
}
