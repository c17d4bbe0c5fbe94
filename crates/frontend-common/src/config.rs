//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Session storage key the login flow writes the JWT to
    pub const TOKEN_KEY: &'static str = goldmanager_http::TOKEN_KEY;

    /// Base path of the backend API on the page's origin
    pub const API_BASE_PATH: &'static str = goldmanager_http::DEFAULT_BASE_PATH;
}
