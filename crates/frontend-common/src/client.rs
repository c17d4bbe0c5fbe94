//! Client configuration and initialization

use crate::config::AuthConfig;
use crate::storage::BrowserSessionStorage;
use goldmanager_http::{ApiClient, ClientError, SessionToken};
use web_sys::window;

/// Get the origin API calls are resolved against
fn get_origin() -> Result<String, ClientError> {
    window()
        .ok_or_else(|| ClientError::Configuration("no window".into()))?
        .location()
        .origin()
        .map_err(|e| ClientError::Configuration(format!("cannot read window origin: {e:?}")))
}

/// Create the application's API client
///
/// Call once at startup and pass the handle down; every request carries
/// `sessionStorage["jwt-token"]` as a bearer token when it is set.
pub fn create_api_client() -> Result<ApiClient, ClientError> {
    let client = ApiClient::builder()
        .origin(get_origin()?)
        .base_path(AuthConfig::API_BASE_PATH)
        .token_provider(SessionToken::with_key(
            BrowserSessionStorage::new(),
            AuthConfig::TOKEN_KEY,
        ))
        .build()?;

    debug!(base_url = %client.base_url(), "API client initialised");
    Ok(client)
}
