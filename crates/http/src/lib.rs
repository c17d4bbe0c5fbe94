//! goldmanager HTTP client
//!
//! Provides the shared API client used by the goldmanager frontend: requests
//! are issued under the `/api/` base path and carry the session's bearer
//! token when one is stored.

#[macro_use]
extern crate tracing;

pub mod client;
pub mod config;
pub mod types;

pub use reqwest;

pub use client::bearer::BearerAuth;
pub use client::error::ClientError;
pub use client::token::{
    MemorySessionStore, NoToken, SessionStorage, SessionToken, StorageError, TOKEN_KEY,
    TokenProvider,
};
pub use client::{ApiClient, ApiClientBuilder, DEFAULT_BASE_PATH, create_client};
pub use config::ClientConfig;
