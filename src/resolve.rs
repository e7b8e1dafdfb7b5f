// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Episode resolution: from an arbitrary shared URL to fyyd episodes
//!
//! This backs a "share a link into the app" feature, so the contract is
//! best-effort enrichment: every failure path, from a malformed URL to a
//! network error mid-scrape, degrades to an empty result instead of
//! surfacing an error.

use url::Url;

use crate::client::{EpisodeQuery, FyydClient, DEFAULT_RESULT_COUNT, WEB_DOMAIN};
use crate::http::HttpClient;
use crate::model::Episode;
use crate::scrape::crawler_for_host;

impl<C: HttpClient> FyydClient<C> {
    /// Find the episodes an arbitrary web URL refers to
    ///
    /// Routing, by the URL's host:
    /// - a host with a registered crawler: scrape the page, then search
    ///   by the extracted metadata; a crawler that finds nothing means
    ///   the page is not an episode page, so no search is attempted;
    /// - `fyyd.de`: direct id lookup for `/episode/<id>` paths, empty
    ///   for everything else;
    /// - any other host: full-text search with the URL itself as term.
    ///
    /// Results come back in API order; no local ranking or filtering.
    /// Never fails: all errors collapse to an empty vector.
    pub async fn resolve_episodes(&self, url: &Url) -> Vec<Episode> {
        self.resolve_episodes_with_count(url, DEFAULT_RESULT_COUNT)
            .await
    }

    /// [`resolve_episodes`](FyydClient::resolve_episodes) with an explicit result count
    pub async fn resolve_episodes_with_count(&self, url: &Url, count: u32) -> Vec<Episode> {
        let Some(host) = url.host_str() else {
            return Vec::new();
        };

        if let Some(crawler) = crawler_for_host(host) {
            let Some(metadata) = crawler.crawl(&self.http, url).await else {
                return Vec::new();
            };
            let query = EpisodeQuery {
                title: metadata.title,
                url: Some(url.to_string()),
                duration: metadata.duration,
                count: Some(count),
                ..EpisodeQuery::default()
            };
            return self.search_episodes(&query).await.unwrap_or_default();
        }

        if host == WEB_DOMAIN {
            return self.resolve_fyyd_url(url).await;
        }

        // Unknown host: search for the URL itself. This covers links
        // shared from a browser or from clients without a crawler.
        let query = EpisodeQuery::new().term(url.to_string()).count(count);
        self.search_episodes(&query).await.unwrap_or_default()
    }

    /// A fyyd.de URL either names an episode by id or nothing at all
    async fn resolve_fyyd_url(&self, url: &Url) -> Vec<Episode> {
        let Some(mut segments) = url.path_segments() else {
            return Vec::new();
        };
        if !segments.any(|segment| segment == "episode") {
            return Vec::new();
        }
        // e.g. https://fyyd.de/episode/1675949, with or without a
        // trailing slash (which shows up as an empty final segment)
        let id = url
            .path_segments()
            .and_then(|segments| segments.rev().find(|segment| !segment.is_empty()))
            .and_then(|segment| segment.parse::<i64>().ok());
        let Some(id) = id else {
            return Vec::new();
        };
        match self.fetch_episode(id).await {
            Ok(episode) => vec![episode],
            Err(_) => Vec::new(),
        }
    }
}
