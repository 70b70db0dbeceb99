//! Persistent cache for the player's hero statistics.
//!
//! A single named slot in a key-value store holds a [`CacheEnvelope`]: the
//! last fetched records plus the time they were captured. The store is
//! injected through [`KeyValueStore`] so the gateway runs against browser
//! `localStorage` in the app and against [`MemoryStore`] in tests.
//!
//! # Envelope format
//! `{"data": [HeroStatRecord, ...], "timestamp": <ms since epoch>}`

use crate::config::{CACHE_KEY, CACHE_TTL_MS};
use crate::HeroStatRecord;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
pub enum CacheError {
    /// Storage could not be obtained (disabled, private mode, no window).
    Unavailable(String),
    /// The envelope could not be serialized.
    Encode(String),
    /// The store rejected the write, e.g. quota exceeded.
    Write(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Unavailable(reason) => write!(f, "Storage unavailable: {}", reason),
            CacheError::Encode(reason) => write!(f, "Failed to encode cache envelope: {}", reason),
            CacheError::Write(reason) => write!(f, "Failed to write cache slot: {}", reason),
        }
    }
}

impl std::error::Error for CacheError {}

/// Minimal string key-value storage, shaped after the Web Storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;
    fn remove_item(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}

/// In-memory store. Interior mutability matches the `&self` storage API.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// The window's `localStorage`.
#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, CacheError> {
        match gloo_utils::window().local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(CacheError::Unavailable(
                "localStorage is not available".into(),
            )),
            Err(e) => Err(CacheError::Unavailable(format!("{:?}", e))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CacheError::Write(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            warn!("Failed to remove cache slot '{}': {:?}", key, e);
        }
    }
}

/// `localStorage` when the browser offers it, else an in-memory store that
/// lasts for the page's lifetime.
pub fn open_default_store() -> Box<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("{}; caching in memory only", e);
            Box::new(MemoryStore::new())
        }
    }
}

/// Cached payload plus capture timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope {
    pub data: Vec<HeroStatRecord>,
    pub timestamp: i64,
}

/// True while the envelope is younger than the freshness window.
///
/// Exactly `CACHE_TTL_MS` old counts as stale. The age saturates, so a
/// corrupt timestamp near `i64::MIN` reads as stale rather than overflowing.
pub fn is_fresh(envelope: &CacheEnvelope, now: i64) -> bool {
    envelope_age(envelope, now) < CACHE_TTL_MS
}

fn envelope_age(envelope: &CacheEnvelope, now: i64) -> i64 {
    now.saturating_sub(envelope.timestamp)
}

/// Reads and writes the one cache slot.
pub struct CacheGateway<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CacheGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, CACHE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored envelope, or `None` when absent or unreadable.
    pub fn read(&self) -> Option<CacheEnvelope> {
        let raw = self.store.get_item(&self.key)?;
        match serde_json::from_str::<CacheEnvelope>(&raw) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                warn!("Ignoring unreadable cache slot '{}': {}", self.key, e);
                None
            }
        }
    }

    pub fn write(&self, records: &[HeroStatRecord], now: i64) -> Result<(), CacheError> {
        let envelope = CacheEnvelope {
            data: records.to_vec(),
            timestamp: now,
        };
        let raw = serde_json::to_string(&envelope)
            .map_err(|e| CacheError::Encode(e.to_string()))?;
        self.store.set_item(&self.key, &raw)?;
        debug!("Cached {} hero records at {}", records.len(), now);
        Ok(())
    }

    pub fn invalidate(&self) {
        self.store.remove_item(&self.key);
    }

    /// Cached records if present and still fresh at `now`.
    pub fn fresh_records(&self, now: i64) -> Option<Vec<HeroStatRecord>> {
        let envelope = self.read()?;
        if is_fresh(&envelope, now) {
            Some(envelope.data)
        } else {
            debug!(
                "Cache slot '{}' is stale ({} ms old)",
                self.key,
                envelope_age(&envelope, now)
            );
            None
        }
    }
}
