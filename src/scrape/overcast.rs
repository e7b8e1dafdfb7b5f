use async_trait::async_trait;
use scraper::Html;
use url::Url;

use crate::http::HttpClient;
use crate::model::EpisodeMetadata;

use super::page;
use super::{metadata_from_parts, Crawler};

/// Crawler for Overcast episode share pages
///
/// Overcast exposes the episode title via OpenGraph and the enclosure
/// via `twitter:player:stream` or an inline `<audio>` element. No
/// duration is published.
pub struct OvercastCrawler;

#[async_trait]
impl Crawler for OvercastCrawler {
    fn host(&self) -> &'static str {
        "overcast.fm"
    }

    async fn crawl(&self, http: &dyn HttpClient, url: &Url) -> Option<EpisodeMetadata> {
        let text = page::fetch_page(http, url).await?;
        let html = Html::parse_document(&text);

        let title = page::meta_content(&html, "og:title");
        let media_url = page::meta_content(&html, "twitter:player:stream")
            .or_else(|| page::element_attr(&html, "audio source", "src"));

        metadata_from_parts(title, None, media_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockHttpClient;

    #[tokio::test]
    async fn extracts_title_and_stream() {
        let page = r#"<html><head>
            <meta name="og:title" content="Do By Friday &#8212; Permission Granted"/>
            <meta name="twitter:player:stream" content="https://example.com/dbf.mp3"/>
        </head></html>"#;
        let http = MockHttpClient::new().route("overcast.fm", page);
        let url = Url::parse("https://overcast.fm/+EtBrVzDVI").unwrap();

        let metadata = OvercastCrawler.crawl(&http, &url).await.unwrap();
        assert_eq!(
            metadata.title.as_deref(),
            Some("Do By Friday \u{2014} Permission Granted")
        );
        assert_eq!(metadata.url.as_deref(), Some("https://example.com/dbf.mp3"));
        assert!(metadata.duration.is_none());
    }

    #[tokio::test]
    async fn falls_back_to_audio_element() {
        let page = r#"<html><body>
            <audio controls><source src="https://example.com/raw.mp3" type="audio/mpeg"/></audio>
        </body></html>"#;
        let http = MockHttpClient::new().route("overcast.fm", page);
        let url = Url::parse("https://overcast.fm/+abc").unwrap();

        let metadata = OvercastCrawler.crawl(&http, &url).await.unwrap();
        assert!(metadata.title.is_none());
        assert_eq!(metadata.url.as_deref(), Some("https://example.com/raw.mp3"));
    }

    #[tokio::test]
    async fn unusable_page_yields_nothing() {
        let http = MockHttpClient::new().route("overcast.fm", "<html><body>nope</body></html>");
        let url = Url::parse("https://overcast.fm/+abc").unwrap();
        assert!(OvercastCrawler.crawl(&http, &url).await.is_none());
    }
}
