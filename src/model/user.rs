use serde::Deserialize;
use url::Url;

/// A fyyd user account
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(rename = "fullname", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "url", default)]
    pub website_url_string: Option<String>,
    #[serde(rename = "layoutImageURL", default)]
    pub avatar_url_string: Option<String>,
}

impl User {
    pub fn website_url(&self) -> Option<Url> {
        self.website_url_string
            .as_deref()
            .and_then(|s| Url::parse(s).ok())
    }

    pub fn avatar_url(&self) -> Option<Url> {
        self.avatar_url_string
            .as_deref()
            .and_then(|s| Url::parse(s).ok())
    }
}
