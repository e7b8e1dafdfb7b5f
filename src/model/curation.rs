use serde::Deserialize;
use url::Url;

use crate::model::Episode;
use crate::subscribe::subscribe_url_schemes;

/// Sentinel id for a curation that does not exist server-side yet
pub const UNSAVED_CURATION_ID: i64 = -1;

/// A user-curated episode collection ("playlist")
///
/// `id >= 0` iff the curation exists server-side; a negative id marks the
/// create-pending state. `type` and `privacy` are 0/1 flags on the wire,
/// exposed through [`is_deletable`](Curation::is_deletable) and
/// [`is_public`](Curation::is_public).
#[derive(Debug, Clone, Deserialize)]
pub struct Curation {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "url", default)]
    pub web_url_string: Option<String>,
    #[serde(rename = "xmlURL", default)]
    pub rss_url_string: Option<String>,
    #[serde(rename = "layoutImageURL", default)]
    pub coverart_url_400_string: Option<String>,
    /// Owner; absent implies the caller's own default curation
    #[serde(rename = "user_id", default)]
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub type_: i64,
    #[serde(rename = "public")]
    pub privacy: i64,
    #[serde(default)]
    pub episodes: Option<Vec<Episode>>,
}

impl Curation {
    /// Create a curation record for a create or update call
    pub fn new(
        id: i64,
        title: Option<String>,
        description: Option<String>,
        is_deletable: bool,
        is_public: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            web_url_string: None,
            rss_url_string: None,
            coverart_url_400_string: None,
            user_id: None,
            type_: if is_deletable { 1 } else { 0 },
            privacy: if is_public { 1 } else { 0 },
            episodes: None,
        }
    }

    /// Whether this curation exists server-side
    pub fn exists(&self) -> bool {
        self.id >= 0
    }

    pub fn is_public(&self) -> bool {
        self.privacy == 1
    }

    pub fn set_public(&mut self, public: bool) {
        self.privacy = if public { 1 } else { 0 };
    }

    /// Non-deletable curations are the user's default/personal curation
    pub fn is_deletable(&self) -> bool {
        self.type_ == 1
    }

    pub fn set_deletable(&mut self, deletable: bool) {
        self.type_ = if deletable { 1 } else { 0 };
    }

    pub fn web_url(&self) -> Option<Url> {
        self.web_url_string
            .as_deref()
            .and_then(|s| Url::parse(s).ok())
    }

    pub fn rss_url(&self) -> Option<Url> {
        self.rss_url_string
            .as_deref()
            .and_then(|s| Url::parse(s).ok())
    }

    pub fn coverart_url_400(&self) -> Option<Url> {
        self.coverart_url_400_string
            .as_deref()
            .and_then(|s| Url::parse(s).ok())
    }

    /// Deep links for subscribing to this curation's feed in third-party clients
    pub fn subscribe_url_schemes(&self) -> Option<Vec<(&'static str, Url)>> {
        self.rss_url().map(|rss_url| subscribe_url_schemes(&rss_url))
    }
}
