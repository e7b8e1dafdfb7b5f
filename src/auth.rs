use std::sync::RwLock;

use url::Url;

/// OAuth authorization endpoint on the fyyd website
pub const AUTHORIZE_URL: &str = "https://fyyd.de/oauth/authorize";

/// Build the browser URL that starts the OAuth login flow
pub fn authorize_url(client_id: &str) -> Url {
    Url::parse_with_params(AUTHORIZE_URL, &[("client_id", client_id)])
        .expect("authorize URL should be valid")
}

/// Extract the access token from an OAuth callback URL
///
/// The token arrives in the URL fragment as `token=...`. Returns `None`
/// for a missing fragment, a different key or an empty value.
pub fn extract_access_token(callback_url: &Url) -> Option<String> {
    let fragment = callback_url.fragment()?;
    let (key, value) = fragment.split_once('=')?;
    if key != "token" || value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

/// Supplies the current bearer token for authenticated API calls
///
/// Each call reads a fresh snapshot; the client never mutates the token.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Process-wide token storage backed by a lock
///
/// `store` and `clear` are called by the host application's login and
/// logout flows; concurrent API calls read per-call snapshots.
#[derive(Debug, Default)]
pub struct MemoryTokenProvider {
    token: RwLock<Option<String>>,
}

impl MemoryTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn store(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}

impl TokenProvider for MemoryTokenProvider {
    fn access_token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_carries_client_id() {
        let url = authorize_url("my-client");
        assert_eq!(url.host_str(), Some("fyyd.de"));
        assert_eq!(url.path(), "/oauth/authorize");
        assert_eq!(url.query(), Some("client_id=my-client"));
    }

    #[test]
    fn extracts_token_from_fragment() {
        let url = Url::parse("https://app.example/callback#token=abc123").unwrap();
        assert_eq!(extract_access_token(&url), Some("abc123".to_string()));
    }

    #[test]
    fn rejects_missing_or_foreign_fragment() {
        let no_fragment = Url::parse("https://app.example/callback").unwrap();
        assert!(extract_access_token(&no_fragment).is_none());

        let wrong_key = Url::parse("https://app.example/callback#code=abc").unwrap();
        assert!(extract_access_token(&wrong_key).is_none());

        let empty_value = Url::parse("https://app.example/callback#token=").unwrap();
        assert!(extract_access_token(&empty_value).is_none());
    }

    #[test]
    fn memory_provider_stores_and_clears() {
        let provider = MemoryTokenProvider::new();
        assert!(provider.access_token().is_none());

        provider.store("secret");
        assert_eq!(provider.access_token(), Some("secret".to_string()));

        provider.clear();
        assert!(provider.access_token().is_none());
    }

    #[test]
    fn with_token_starts_populated() {
        let provider = MemoryTokenProvider::with_token("t");
        assert_eq!(provider.access_token(), Some("t".to_string()));
    }
}
