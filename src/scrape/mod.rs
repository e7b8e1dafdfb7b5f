// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-specific page crawlers
//!
//! Each crawler reads one podcast client's episode share page and tries
//! to recover title, duration and a media or page URL. Third-party HTML
//! is unreliable by nature, so extraction failure is a normal, silent
//! outcome: a crawler never errors, it resolves to `None`.

mod apple_podcasts;
mod castro;
mod overcast;
mod page;
mod pocket_casts;

use async_trait::async_trait;
use url::Url;

use crate::http::HttpClient;
use crate::model::EpisodeMetadata;

pub use apple_podcasts::ApplePodcastsCrawler;
pub use castro::CastroCrawler;
pub use overcast::OvercastCrawler;
pub use pocket_casts::PocketCastsCrawler;

/// A host-specific episode page scraper
///
/// Single attempt, no retries, no timeout of its own. The `host` is only
/// a dispatch key; it plays no role in parsing.
#[async_trait]
pub trait Crawler: Send + Sync {
    /// The host this crawler is registered for, e.g. `"overcast.fm"`
    fn host(&self) -> &'static str;

    /// Fetch the page and extract episode metadata
    ///
    /// Any fetch or parse failure collapses to `None`.
    async fn crawl(&self, http: &dyn HttpClient, url: &Url) -> Option<EpisodeMetadata>;
}

/// The built-in crawler registry, fixed at build time
///
/// Hosts are disjoint string literals, so first-match is unambiguous.
static CRAWLERS: [&dyn Crawler; 4] = [
    &PocketCastsCrawler,
    &OvercastCrawler,
    &ApplePodcastsCrawler,
    &CastroCrawler,
];

/// Look up the crawler registered for a host, if any
pub fn crawler_for_host(host: &str) -> Option<&'static dyn Crawler> {
    CRAWLERS.into_iter().find(|crawler| crawler.host() == host)
}

/// Build an [`EpisodeMetadata`] unless every field came up empty
pub(crate) fn metadata_from_parts(
    title: Option<String>,
    duration: Option<u32>,
    url: Option<String>,
) -> Option<EpisodeMetadata> {
    if title.is_none() && duration.is_none() && url.is_none() {
        return None;
    }
    Some(EpisodeMetadata {
        title,
        duration,
        url,
    })
}
