//! Pre-send hook attaching the session bearer token

use super::error::ClientError;
use super::token::TokenProvider;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::sync::Arc;

/// Sets `Authorization: Bearer <token>` on a request when a token is stored
///
/// The provider is consulted on every call; nothing is cached.
#[derive(Clone)]
pub struct BearerAuth {
    tokens: Arc<dyn TokenProvider>,
}

impl BearerAuth {
    pub fn new(tokens: impl TokenProvider + 'static) -> Self {
        Self::from_arc(Arc::new(tokens))
    }

    pub fn from_arc(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { tokens }
    }

    /// Apply the hook to a built request, returning whether a credential was set
    pub fn apply(&self, request: &mut reqwest::Request) -> Result<bool, ClientError> {
        self.apply_headers(request.headers_mut())
    }

    /// Apply the hook to a header map
    ///
    /// An absent or empty token leaves `headers` exactly as it was.
    pub fn apply_headers(&self, headers: &mut HeaderMap) -> Result<bool, ClientError> {
        let token = match self.tokens.token() {
            Ok(token) => token,
            Err(error) => {
                warn!(%error, "Failed to read session token");
                return Err(error.into());
            }
        };

        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return Ok(false);
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ClientError::InvalidCredential(e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::token::{MemorySessionStore, NoToken, SessionToken, StorageError, TOKEN_KEY};

    fn request() -> reqwest::Request {
        reqwest::Client::new()
            .get("http://localhost/api/orders")
            .build()
            .unwrap()
    }

    #[test]
    fn test_sets_bearer_header_when_token_present() {
        let store = MemorySessionStore::new();
        store.set_item(TOKEN_KEY, "abc123");
        let auth = BearerAuth::new(SessionToken::new(store));

        let mut req = request();
        assert!(auth.apply(&mut req).unwrap());

        let value = req.headers().get(header::AUTHORIZATION).unwrap();
        assert_eq!(value, "Bearer abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_absent_token_leaves_headers_untouched() {
        let auth = BearerAuth::new(SessionToken::new(MemorySessionStore::new()));

        let mut req = request();
        req.headers_mut()
            .insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let before = req.headers().clone();

        assert!(!auth.apply(&mut req).unwrap());
        assert_eq!(req.headers(), &before);
        assert!(req.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemorySessionStore::new();
        store.set_item(TOKEN_KEY, "");
        let auth = BearerAuth::new(SessionToken::new(store));

        let mut req = request();
        assert!(!auth.apply(&mut req).unwrap());
        assert!(req.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_absent_token_does_not_clear_existing_header() {
        let auth = BearerAuth::new(NoToken);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));

        assert!(!auth.apply_headers(&mut headers).unwrap());
        assert_eq!(headers[header::AUTHORIZATION], "Basic Zm9vOmJhcg==");
    }

    #[test]
    fn test_present_token_overwrites_existing_header() {
        let auth = BearerAuth::new(|| -> Result<Option<String>, StorageError> {
            Ok(Some("fresh".to_string()))
        });

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer stale"));

        assert!(auth.apply_headers(&mut headers).unwrap());
        assert_eq!(headers.get_all(header::AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers[header::AUTHORIZATION], "Bearer fresh");
    }

    #[test]
    fn test_token_is_read_on_every_call() {
        let store = MemorySessionStore::new();
        let auth = BearerAuth::new(SessionToken::new(store.clone()));

        store.set_item(TOKEN_KEY, "first");
        let mut first = HeaderMap::new();
        auth.apply_headers(&mut first).unwrap();

        let mut again = HeaderMap::new();
        auth.apply_headers(&mut again).unwrap();

        store.set_item(TOKEN_KEY, "second");
        let mut second = HeaderMap::new();
        auth.apply_headers(&mut second).unwrap();

        assert_eq!(first[header::AUTHORIZATION], "Bearer first");
        assert_eq!(again[header::AUTHORIZATION], "Bearer first");
        assert_eq!(second[header::AUTHORIZATION], "Bearer second");
    }

    #[test]
    fn test_storage_fault_propagates() {
        let auth = BearerAuth::new(|| -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("quota".to_string()))
        });

        let mut headers = HeaderMap::new();
        let result = auth.apply_headers(&mut headers);

        assert!(matches!(
            result,
            Err(ClientError::TokenStore(StorageError::Read(ref m))) if m == "quota"
        ));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_unrepresentable_token_is_rejected() {
        let auth = BearerAuth::new(|| -> Result<Option<String>, StorageError> {
            Ok(Some("line\nbreak".to_string()))
        });

        let mut headers = HeaderMap::new();
        let result = auth.apply_headers(&mut headers);

        assert!(matches!(result, Err(ClientError::InvalidCredential(_))));
        assert!(headers.is_empty());
    }
}
