//! goldmanager API client
//!
//! One [`ApiClient`] is built at startup and handed to the rest of the
//! application. Every request it sends is resolved against the `/api/` base
//! path and passes through [`BearerAuth`] right before dispatch.

pub mod bearer;
pub mod error;
pub mod price_history;
pub mod token;
pub mod users;

use crate::config::ClientConfig;
use bearer::BearerAuth;
use error::ClientError;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use std::sync::Arc;
use token::{NoToken, SessionStorage, SessionToken, TokenProvider};
use url::Url;

/// Path prefix every relative request is issued under
pub const DEFAULT_BASE_PATH: &str = "/api/";

const DEFAULT_USER_AGENT: &str = concat!("goldmanager-client/", env!("CARGO_PKG_VERSION"));

/// Build the shared client for `origin` with the `/api/` base path
///
/// The token is read from `tokens` on every request.
pub fn create_client(
    origin: impl Into<String>,
    tokens: impl TokenProvider + 'static,
) -> Result<ApiClient, ClientError> {
    ApiClient::builder()
        .origin(origin)
        .token_provider(tokens)
        .build()
}

/// Shared goldmanager API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    auth: BearerAuth,
}

impl ApiClient {
    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Build a client from loaded configuration, reading the token from `storage`
    pub fn from_config(
        config: &ClientConfig,
        storage: impl SessionStorage + 'static,
    ) -> Result<Self, ClientError> {
        let mut builder = Self::builder()
            .origin(&config.origin)
            .base_path(&config.base_path)
            .token_provider(SessionToken::with_key(storage, &config.token_key));

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder.build()
    }

    /// Get the base URL (origin joined with the base path)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    ///
    /// Relative paths are appended to the base with exactly one `/` between
    /// them, so `users/1` and `/users/1` land on the same URL. Absolute URLs
    /// are left alone.
    pub fn resolve(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return self
                .base_url
                .join(path)
                .map_or_else(|_| path.to_string(), String::from);
        }

        if path.is_empty() {
            return self.base_url.to_string();
        }

        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Create a request builder for a path under the base URL
    ///
    /// No credential is attached here; [`ApiClient::send`] does that at
    /// dispatch time so the freshest stored token is used.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.resolve(path))
    }

    /// Create a request builder for a route built from path segments
    ///
    /// Each segment is percent-encoded on its own, so caller-supplied values
    /// such as usernames can't add segments, start a query or a fragment.
    /// Empty, `.` and `..` segments are rejected.
    pub fn request_segments(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ClientError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ClientError::InvalidPath(format!(
                "'{segment}' is not a valid path segment"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::Configuration(format!(
                    "base URL '{}' cannot be a base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(self.client.request(method, url))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Run the bearer hook and dispatch the request
    ///
    /// The response is returned as received, error statuses included.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let mut request = request.build()?;
        let authenticated = self.auth.apply(&mut request)?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            authenticated,
            "Sending API request"
        );

        Ok(self.client.execute(request).await?)
    }

    /// Send a request and decode a JSON success body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.checked(request).await?;
        Ok(response.json().await?)
    }

    /// Send a request whose success response carries no body
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.checked(request).await.map(|_| ())
    }

    async fn checked(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = self.send(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            debug!(status = status.as_u16(), "API request failed");
            Err(ClientError::from_status(status, body))
        }
    }
}

/// Builder for ApiClient
pub struct ApiClientBuilder {
    origin: Option<String>,
    base_path: String,
    user_agent: Option<String>,
    tokens: Arc<dyn TokenProvider>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            origin: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
            user_agent: None,
            tokens: Arc::new(NoToken),
        }
    }
}

impl ApiClientBuilder {
    /// Set the origin the base path is resolved against (e.g. `https://gold.example`)
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Override the base path (defaults to `/api/`)
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set where the bearer token is read from
    pub fn token_provider(mut self, tokens: impl TokenProvider + 'static) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let origin = self
            .origin
            .ok_or_else(|| ClientError::Configuration("origin is required".into()))?;

        let origin = Url::parse(&origin)
            .map_err(|e| ClientError::Configuration(format!("invalid origin '{origin}': {e}")))?;
        if origin.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "origin '{origin}' cannot be a base URL"
            )));
        }

        let base_url = origin.join(&self.base_path).map_err(|e| {
            ClientError::Configuration(format!("invalid base path '{}': {e}", self.base_path))
        })?;

        let client = ClientBuilder::new()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        Ok(ApiClient {
            client,
            base_url,
            auth: BearerAuth::from_arc(self.tokens),
        })
    }
}

fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }

    path.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
