//! Typed preference store
//!
//! A thread-safe, in-memory key-value store for small pieces of
//! application state. Values are kept as JSON, so anything serde can
//! round-trip is storable without the store knowing its type.

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(feature = "ahash")]
use ahash::AHashMap as HashMap;
#[cfg(not(feature = "ahash"))]
use std::collections::HashMap;

/// Errors that can occur while storing or reading a preference value.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// The value could not be serialized to JSON.
    #[error("failed to serialize value for key `{key}`: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    /// The stored value could not be deserialized into the requested type.
    #[error("failed to deserialize value for key `{key}`: {source}")]
    Deserialize {
        key: String,
        source: serde_json::Error,
    },
}

/// A thread-safe typed key-value store.
///
/// # Example
///
/// ```
/// use throttlekit::Preferences;
///
/// let prefs = Preferences::new();
///
/// prefs.set("volume", 0.8).unwrap();
/// prefs.set("username", "jordan").unwrap();
///
/// let volume: Option<f64> = prefs.get("volume").unwrap();
/// assert_eq!(volume, Some(0.8));
/// assert!(prefs.contains("username"));
/// ```
#[derive(Default)]
pub struct Preferences {
    values: RwLock<HashMap<String, serde_json::Value>>,
}

impl Preferences {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: T) -> Result<(), PrefsError> {
        let json = serde_json::to_value(value).map_err(|source| PrefsError::Serialize {
            key: key.to_string(),
            source,
        })?;

        self.values.write().insert(key.to_string(), json);
        tracing::trace!(key, "preference set");
        Ok(())
    }

    /// Read the value stored under `key`, if any.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when a value
    /// exists but cannot be read as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PrefsError> {
        let Some(json) = self.values.read().get(key).cloned() else {
            return Ok(None);
        };

        serde_json::from_value(json)
            .map(Some)
            .map_err(|source| PrefsError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    /// Whether the store contains the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    /// Remove the value stored under `key`, reporting whether it existed.
    pub fn remove(&self, key: &str) -> bool {
        self.values.write().remove(key).is_some()
    }

    /// Remove all key-value pairs.
    pub fn remove_all(&self) {
        self.values.write().clear();
        tracing::debug!("preferences cleared");
    }

    /// All keys currently present, in arbitrary order.
    pub fn keys(&self) -> Vec<String> {
        self.values.read().keys().cloned().collect()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}
