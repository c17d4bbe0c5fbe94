//! Session-scoped credential sources
//!
//! The client never owns the token. It asks a [`TokenProvider`] on every
//! request, and the usual provider is [`SessionToken`], which reads one key
//! out of a [`SessionStorage`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Session storage key holding the JWT issued at login
pub const TOKEN_KEY: &str = "jwt-token";

/// Failures of the storage backend itself (not a missing token)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The storage area cannot be reached at all
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    /// The storage area exists but the read failed
    #[error("session storage read failed: {0}")]
    Read(String),
}

/// Read access to a session-scoped key-value store
pub trait SessionStorage: Send + Sync {
    /// Get the value stored under `key`, `Ok(None)` when absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Source of the bearer credential attached to outgoing requests
pub trait TokenProvider: Send + Sync {
    /// Current token, `Ok(None)` for anonymous requests
    fn token(&self) -> Result<Option<String>, StorageError>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Result<Option<String>, StorageError> + Send + Sync,
{
    fn token(&self) -> Result<Option<String>, StorageError> {
        self()
    }
}

/// Provider for clients that never authenticate
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
}

/// Reads the token from a session storage key on every call
#[derive(Debug, Clone)]
pub struct SessionToken<S> {
    storage: S,
    key: String,
}

impl<S: SessionStorage> SessionToken<S> {
    /// Read from the default `jwt-token` key
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, TOKEN_KEY)
    }

    /// Read from a custom key
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The storage key this provider reads
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: SessionStorage> TokenProvider for SessionToken<S> {
    fn token(&self) -> Result<Option<String>, StorageError> {
        self.storage.get_item(&self.key)
    }
}

/// In-process session storage for native hosts and tests
///
/// Clones share the same map, so the login flow can hold one handle and write
/// while the client reads through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(key.into(), value.into());
    }

    pub fn remove_item(&self, key: &str) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
    }

    pub fn clear(&self) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.clear();
    }
}

impl SessionStorage for MemorySessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(items.get(key).cloned())
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }
}
