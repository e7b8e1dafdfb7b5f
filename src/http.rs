// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::HttpError;

/// HTTP client abstraction for testability
///
/// The fyyd API only needs two request shapes: a GET with query
/// parameters and a POST with a URL-encoded form body. Both optionally
/// carry a bearer token.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request and return the response body
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<Bytes, HttpError>;

    /// Issue a POST request with a form-encoded body and return the response body
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<Bytes, HttpError>;
}

/// Default HTTP client implementation using reqwest
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new ReqwestClient with default settings
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestClient with a custom reqwest::Client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<Bytes, HttpError> {
        let mut request = self.client.get(url).query(query);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        read_body(url, request.send().await?).await
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<Bytes, HttpError> {
        let mut request = self.client.post(url).form(form);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        read_body(url, request.send().await?).await
    }
}

async fn read_body(url: &str, response: reqwest::Response) -> Result<Bytes, HttpError> {
    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?)
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub params: Vec<(String, String)>,
        pub bearer: Option<String>,
    }

    /// Test double answering by URL substring; records every request.
    /// Unrouted URLs get a 404 status error.
    #[derive(Default)]
    pub(crate) struct MockHttpClient {
        routes: Vec<(String, String)>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn route(mut self, url_fragment: &str, body: &str) -> Self {
            self.routes.push((url_fragment.to_string(), body.to_string()));
            self
        }

        pub fn recorded(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn respond(
            &self,
            method: &'static str,
            url: &str,
            params: &[(&str, String)],
            bearer: Option<&str>,
        ) -> Result<Bytes, HttpError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                bearer: bearer.map(String::from),
            });
            for (fragment, body) in &self.routes {
                if url.contains(fragment.as_str()) {
                    return Ok(Bytes::from(body.clone()));
                }
            }
            Err(HttpError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(
            &self,
            url: &str,
            query: &[(&str, String)],
            bearer: Option<&str>,
        ) -> Result<Bytes, HttpError> {
            self.respond("GET", url, query, bearer)
        }

        async fn post_form(
            &self,
            url: &str,
            form: &[(&str, String)],
            bearer: Option<&str>,
        ) -> Result<Bytes, HttpError> {
            self.respond("POST", url, form, bearer)
        }
    }
}
