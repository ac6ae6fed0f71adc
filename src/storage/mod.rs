//! Persistent key-value adapter over a host-provided storage medium.

mod medium;

pub use medium::{FileMedium, MemoryMedium, StorageMedium};

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::Context;

/// JSON-encoding key-value adapter.
///
/// Cheap to clone; clones share one medium and one execution context. No
/// operation panics or propagates an error: in a headless context, or when
/// the medium or serialization fails, calls report failure (`false`) or hand
/// back the caller's default, with a log line for diagnostics.
#[derive(Clone)]
pub struct Storage {
    medium: Rc<dyn StorageMedium>,
    context: Context,
}

impl Storage {
    pub fn new(context: Context, medium: Rc<dyn StorageMedium>) -> Self {
        Self { medium, context }
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Serialize `value` to JSON and write it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        if !self.context.is_interactive() {
            return false;
        }

        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(e) => {
                log::warn!("Failed to serialize value for {:?}: {}", key, e);
                return false;
            }
        };

        match self.medium.set_item(key, &serialized) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to store {:?}: {}", key, e);
                false
            }
        }
    }

    /// Read and decode the value under `key`.
    ///
    /// Returns `default` verbatim when the context is headless, the key is
    /// absent, or the stored text does not decode as a `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        if !self.context.is_interactive() {
            return default;
        }

        let raw = match self.medium.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                log::warn!("Failed to read {:?}: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Stored value for {:?} does not parse, using default: {}", key, e);
                default
            }
        }
    }

    /// Delete `key`. Deleting an absent key still succeeds.
    pub fn remove(&self, key: &str) -> bool {
        if !self.context.is_interactive() {
            return false;
        }

        match self.medium.remove_item(key) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to remove {:?}: {}", key, e);
                false
            }
        }
    }

    /// Delete every key in the namespace.
    pub fn clear(&self) -> bool {
        if !self.context.is_interactive() {
            return false;
        }

        match self.medium.clear() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to clear storage: {}", e);
                false
            }
        }
    }

    /// Whether `key` is present. False in a headless context.
    pub fn has(&self, key: &str) -> bool {
        if !self.context.is_interactive() {
            return false;
        }

        matches!(self.medium.get_item(key), Ok(Some(_)))
    }
}
