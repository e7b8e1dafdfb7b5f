// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::auth::TokenProvider;
use crate::error::FyydError;
use crate::http::{HttpClient, ReqwestClient};
use crate::model::{Curation, Episode, ItunesCategory, Podcast, User};

/// Base URL of the fyyd REST API
pub const API_BASE_URL: &str = "https://api.fyyd.de/0.2";

/// Canonical domain of the fyyd website, used for URL routing
pub(crate) const WEB_DOMAIN: &str = "fyyd.de";

/// Default number of results requested from search endpoints
pub const DEFAULT_RESULT_COUNT: u32 = 20;

/// Every API response wraps its payload in a `data` envelope
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// `/category/curation` nests its list one level deeper
#[derive(Deserialize)]
struct CurationList {
    curations: Vec<Curation>,
}

/// Sparse search parameters for `/search/episode`
///
/// Only populated fields are serialized. Omitting a field leaves that
/// search axis unconstrained; omitting `duration` performs an
/// unconstrained-duration search, not a zero-duration one.
#[derive(Debug, Clone, Default)]
pub struct EpisodeQuery {
    pub title: Option<String>,
    pub url: Option<String>,
    /// Duration in seconds
    pub duration: Option<u32>,
    pub podcast_title: Option<String>,
    pub guid: Option<String>,
    /// Free-text search term
    pub term: Option<String>,
    /// Result count; defaults to [`DEFAULT_RESULT_COUNT`]
    pub count: Option<u32>,
}

impl EpisodeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn podcast_title(mut self, podcast_title: impl Into<String>) -> Self {
        self.podcast_title = Some(podcast_title.into());
        self
    }

    pub fn guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(title) = &self.title {
            params.push(("title", title.clone()));
        }
        if let Some(url) = &self.url {
            params.push(("url", url.clone()));
        }
        if let Some(duration) = self.duration {
            params.push(("duration", duration.to_string()));
        }
        if let Some(podcast_title) = &self.podcast_title {
            params.push(("podcast_title", podcast_title.clone()));
        }
        if let Some(guid) = &self.guid {
            params.push(("guid", guid.clone()));
        }
        if let Some(term) = &self.term {
            params.push(("term", term.clone()));
        }
        params.push(("count", self.count.unwrap_or(DEFAULT_RESULT_COUNT).to_string()));
        params
    }
}

/// Sparse search parameters for `/search/podcast`
#[derive(Debug, Clone, Default)]
pub struct PodcastQuery {
    pub title: Option<String>,
    pub url: Option<String>,
    pub term: Option<String>,
    pub count: Option<u32>,
}

impl PodcastQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(title) = &self.title {
            params.push(("title", title.clone()));
        }
        if let Some(url) = &self.url {
            params.push(("url", url.clone()));
        }
        if let Some(term) = &self.term {
            params.push(("term", term.clone()));
        }
        params.push(("count", self.count.unwrap_or(DEFAULT_RESULT_COUNT).to_string()));
        params
    }
}

/// Client for the fyyd podcast directory API
///
/// Stateless apart from the injected token provider; a single instance
/// can serve concurrent calls.
pub struct FyydClient<C: HttpClient = ReqwestClient> {
    pub(crate) http: C,
    pub(crate) tokens: Arc<dyn TokenProvider>,
    pub(crate) base_url: String,
}

impl<C: HttpClient> FyydClient<C> {
    pub fn new(http: C, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http,
            tokens,
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL, for tests or alternate deployments
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn require_token(&self) -> Result<String, FyydError> {
        self.tokens
            .access_token()
            .ok_or(FyydError::MissingAccessToken)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<T, FyydError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let bytes = self
            .http
            .get(&url, query, bearer)
            .await
            .map_err(|e| FyydError::Http {
                url: url.clone(),
                source: e,
            })?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&bytes).map_err(|e| FyydError::Decode { url, source: e })?;
        Ok(envelope.data)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<T, FyydError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");
        let bytes = self
            .http
            .post_form(&url, form, bearer)
            .await
            .map_err(|e| FyydError::Http {
                url: url.clone(),
                source: e,
            })?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&bytes).map_err(|e| FyydError::Decode { url, source: e })?;
        Ok(envelope.data)
    }

    /// POST where the response body carries nothing we need
    async fn post_ok(
        &self,
        path: &str,
        form: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<(), FyydError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");
        self.http
            .post_form(&url, form, bearer)
            .await
            .map_err(|e| FyydError::Http { url, source: e })?;
        Ok(())
    }

    /// Fetch a single episode by its fyyd id
    ///
    /// An unknown id surfaces as an HTTP error from the API.
    pub async fn fetch_episode(&self, id: i64) -> Result<Episode, FyydError> {
        self.get_json("/episode", &[("episode_id", id.to_string())], None)
            .await
    }

    /// Fetch a podcast, optionally with its episode list embedded
    pub async fn fetch_podcast(
        &self,
        id: i64,
        include_episodes: bool,
    ) -> Result<Podcast, FyydError> {
        let path = if include_episodes {
            "/podcast/episodes"
        } else {
            "/podcast"
        };
        self.get_json(path, &[("podcast_id", id.to_string())], None)
            .await
    }

    /// Fetch a public user profile
    pub async fn fetch_public_user(&self, id: i64) -> Result<User, FyydError> {
        self.get_json("/user", &[("user_id", id.to_string())], None)
            .await
    }

    /// Fetch the account of the currently logged-in user
    pub async fn fetch_authorized_user(&self) -> Result<User, FyydError> {
        let token = self.require_token()?;
        self.get_json("/account/info", &[], Some(&token)).await
    }

    /// Fetch a curation, optionally with its episode list embedded
    ///
    /// Sends the bearer token when one is available so private curations
    /// of the logged-in user resolve too.
    pub async fn fetch_curation(
        &self,
        id: i64,
        include_episodes: bool,
    ) -> Result<Curation, FyydError> {
        let path = if include_episodes {
            "/curation/episodes"
        } else {
            "/curation"
        };
        let token = self.tokens.access_token();
        self.get_json(path, &[("curation_id", id.to_string())], token.as_deref())
            .await
    }

    /// List public curations in a category
    pub async fn fetch_curations_by_category(
        &self,
        category: ItunesCategory,
        count: u32,
    ) -> Result<Vec<Curation>, FyydError> {
        let params = [
            ("category_id", category.id().to_string()),
            ("count", count.to_string()),
        ];
        let list: CurationList = self.get_json("/category/curation", &params, None).await?;
        Ok(list.curations)
    }

    /// List the public curations of a user
    pub async fn fetch_public_user_curations(
        &self,
        user_id: i64,
    ) -> Result<Vec<Curation>, FyydError> {
        self.get_json("/user/curations", &[("user_id", user_id.to_string())], None)
            .await
    }

    /// List all curations of the currently logged-in user
    pub async fn fetch_authorized_user_curations(&self) -> Result<Vec<Curation>, FyydError> {
        let token = self.require_token()?;
        self.get_json("/account/curations", &[], Some(&token)).await
    }

    /// Full-text and field search over episodes
    pub async fn search_episodes(&self, query: &EpisodeQuery) -> Result<Vec<Episode>, FyydError> {
        self.get_json("/search/episode", &query.params(), None).await
    }

    /// Full-text and field search over podcasts
    pub async fn search_podcasts(&self, query: &PodcastQuery) -> Result<Vec<Podcast>, FyydError> {
        self.get_json("/search/podcast", &query.params(), None).await
    }

    /// Full-text search over curations, optionally restricted to a category
    pub async fn search_curations(
        &self,
        term: &str,
        category: Option<ItunesCategory>,
        count: u32,
    ) -> Result<Vec<Curation>, FyydError> {
        let mut params = vec![("term", term.to_string()), ("count", count.to_string())];
        if let Some(category) = category {
            params.push(("category", category.id().to_string()));
        }
        self.get_json("/search/curation", &params, None).await
    }

    /// Create a new curation from the given record
    ///
    /// The API treats create and update as the same call; a record with a
    /// negative id creates, one with an existing id updates.
    pub async fn create_curation(&self, curation: &Curation) -> Result<Curation, FyydError> {
        self.update_curation(curation).await
    }

    /// Update a curation (or create it, when its id is the unsaved sentinel)
    pub async fn update_curation(&self, curation: &Curation) -> Result<Curation, FyydError> {
        let token = self.require_token()?;
        let (title, description) = match (&curation.title, &curation.description) {
            (Some(title), Some(description)) => (title, description),
            _ => return Err(FyydError::MissingMetadata),
        };
        let mut form = vec![
            ("title", title.clone()),
            ("description", description.clone()),
            ("public", if curation.is_public() { "1" } else { "0" }.to_string()),
        ];
        if curation.exists() {
            form.push(("curation_id", curation.id.to_string()));
        }
        self.post_json("/curation", &form, Some(&token)).await
    }

    /// Delete a curation
    ///
    /// Checked before any network call: the user's personal curation is
    /// not deletable.
    pub async fn delete_curation(&self, curation: &Curation) -> Result<(), FyydError> {
        if !curation.is_deletable() {
            return Err(FyydError::CurationNotDeletable);
        }
        let token = self.require_token()?;
        let form = [("curation_id", curation.id.to_string())];
        self.post_ok("/curation/delete", &form, Some(&token)).await
    }

    /// Add an episode to a curation, with an optional "why" message
    pub async fn add_episode_to_curation(
        &self,
        episode_id: i64,
        curation_id: i64,
        message: Option<&str>,
    ) -> Result<(), FyydError> {
        let token = self.require_token()?;
        let mut form = vec![
            ("episode_id", episode_id.to_string()),
            ("curation_id", curation_id.to_string()),
            ("force_state", "true".to_string()),
        ];
        if let Some(message) = message {
            form.push(("why", message.to_string()));
        }
        self.post_ok("/curate", &form, Some(&token)).await
    }

    /// Remove an episode from a curation
    pub async fn remove_episode_from_curation(
        &self,
        episode_id: i64,
        curation_id: i64,
    ) -> Result<(), FyydError> {
        let token = self.require_token()?;
        let form = [
            ("episode_id", episode_id.to_string()),
            ("curation_id", curation_id.to_string()),
            ("force_state", "false".to_string()),
        ];
        self.post_ok("/curate", &form, Some(&token)).await
    }
}
