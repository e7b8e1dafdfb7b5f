use thiserror::Error;

/// Errors produced by the HTTP transport layer
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Errors that can occur when talking to the fyyd API
#[derive(Error, Debug)]
pub enum FyydError {
    #[error("Missing access token")]
    MissingAccessToken,

    #[error("This curation can not be deleted because it is your personal curation")]
    CurationNotDeletable,

    #[error("Curation is missing a title or description")]
    MissingMetadata,

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
