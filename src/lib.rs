pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod model;
mod resolve;
pub mod scrape;
pub mod subscribe;

// Re-export main types for convenience
pub use auth::{authorize_url, extract_access_token, MemoryTokenProvider, TokenProvider};
pub use client::{EpisodeQuery, FyydClient, PodcastQuery, API_BASE_URL, DEFAULT_RESULT_COUNT};
pub use error::{FyydError, HttpError};
pub use http::{HttpClient, ReqwestClient};
pub use model::{Curation, Episode, EpisodeMetadata, ItunesCategory, Podcast, User};
pub use scrape::{crawler_for_host, Crawler};
pub use subscribe::subscribe_url_schemes;
