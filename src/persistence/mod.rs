//! Key/value persistence collaborator
//!
//! The leaderboard and settings are small JSON blobs behind a string
//! key/value seam. The browser build backs it with LocalStorage; native and
//! tests use the in-memory store. Failures are logged and reported as
//! absence/false - persistence problems never abort gameplay.

use std::collections::HashMap;

/// Storage capability the game needs: get/set string blobs by key.
pub trait Storage {
    /// Read a value, `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, returning whether the write stuck.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// Volatile storage for native runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

/// Browser LocalStorage adapter (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok()).flatten();
        match storage {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => {
                log::warn!("LocalStorage unavailable, reading nothing for '{}'", key);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok()).flatten();
        match storage {
            Some(storage) => match storage.set_item(key, value) {
                Ok(()) => true,
                Err(_) => {
                    log::warn!("failed to persist '{}'", key);
                    false
                }
            },
            None => {
                log::warn!("LocalStorage unavailable, dropping write for '{}'", key);
                false
            }
        }
    }
}
