//! Browser glue for the goldmanager API client

#[macro_use]
extern crate tracing;

pub mod client;
pub mod config;
pub mod logging;
pub mod storage;

pub use client::create_api_client;
pub use config::AuthConfig;
pub use logging::init_logging;
pub use storage::BrowserSessionStorage;
