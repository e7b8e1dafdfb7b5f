use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

/// A podcast episode as returned by the fyyd API
///
/// Episode ids are assigned by the API and never renumbered client-side.
/// Records are immutable once decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: i64,
    /// GUID from the podcast feed; may duplicate across feeds
    pub guid: String,
    pub title: String,
    #[serde(rename = "url")]
    pub web_url_string: String,
    #[serde(rename = "enclosure")]
    pub enclosure_url_string: String,
    pub podcast_id: i64,
    #[serde(rename = "pubdate")]
    pub release_date: DateTime<Utc>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<u32>,
    /// When the episode was added to a curation, if fetched through one
    #[serde(rename = "favedDate", default)]
    pub curation_date: Option<DateTime<Utc>>,
    #[serde(rename = "url_fyyd")]
    pub fyyd_web_url_string: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imgURL", default)]
    pub image_url_string: Option<String>,
}

impl Episode {
    /// The episode's web page on the publisher's site
    pub fn web_url(&self) -> Option<Url> {
        Url::parse(&self.web_url_string).ok()
    }

    /// The direct media (audio file) URL
    pub fn enclosure_url(&self) -> Option<Url> {
        Url::parse(&self.enclosure_url_string).ok()
    }

    /// The episode's page on fyyd.de
    pub fn fyyd_web_url(&self) -> Option<Url> {
        Url::parse(&self.fyyd_web_url_string).ok()
    }

    pub fn image_url(&self) -> Option<Url> {
        self.image_url_string
            .as_deref()
            .and_then(|s| Url::parse(s).ok())
    }
}

/// Partial episode metadata extracted from a third-party web page
///
/// Produced by a [`Crawler`](crate::scrape::Crawler) and consumed by the
/// search fallback of the resolution dispatcher. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeMetadata {
    pub title: Option<String>,
    /// Duration in seconds
    pub duration: Option<u32>,
    /// Page or enclosure URL found on the page
    pub url: Option<String>,
}
