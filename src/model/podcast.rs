// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::model::Episode;
use crate::subscribe::subscribe_url_schemes;

/// A podcast as returned by the fyyd API
#[derive(Debug, Clone, Deserialize)]
pub struct Podcast {
    pub title: String,
    pub id: i64,
    #[serde(rename = "imgURL")]
    pub coverart_url_string: String,
    pub slug: String,
    #[serde(rename = "layoutImageURL")]
    pub coverart_thumbnail_url_string: String,
    #[serde(rename = "language")]
    pub language_code: String,
    #[serde(rename = "lastpub")]
    pub last_publication_date: DateTime<Utc>,
    /// iTunes taxonomy codes, in feed order
    #[serde(rename = "categories")]
    pub itunes_categories: Vec<i64>,
    #[serde(rename = "rank")]
    pub ranking: i64,
    #[serde(rename = "url_fyyd")]
    pub fyyd_web_url_string: String,
    pub description: String,
    pub subtitle: String,
    /// Present when fetched with episodes included
    #[serde(default)]
    pub episodes: Option<Vec<Episode>>,
    #[serde(rename = "lastpoll")]
    pub last_fyyd_refresh_date: DateTime<Utc>,
    #[serde(rename = "xmlURL")]
    pub rss_feed_url_string: String,
}

impl Podcast {
    pub fn coverart_url(&self) -> Option<Url> {
        Url::parse(&self.coverart_url_string).ok()
    }

    pub fn coverart_thumbnail_url(&self) -> Option<Url> {
        Url::parse(&self.coverart_thumbnail_url_string).ok()
    }

    pub fn fyyd_web_url(&self) -> Option<Url> {
        Url::parse(&self.fyyd_web_url_string).ok()
    }

    pub fn rss_feed_url(&self) -> Option<Url> {
        Url::parse(&self.rss_feed_url_string).ok()
    }

    /// Deep links for subscribing to this podcast in third-party clients
    ///
    /// `None` when the RSS feed URL does not parse.
    pub fn subscribe_url_schemes(&self) -> Option<Vec<(&'static str, Url)>> {
        self.rss_feed_url()
            .map(|rss_url| subscribe_url_schemes(&rss_url))
    }
}
