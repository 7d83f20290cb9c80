//! `localStorage` backing for the session store.
//!
//! Tokens are stored as raw strings, not JSON-encoded.

use crate::core::session::{KeyValueBackend, PersistentSessionStore};
use anyhow::{Result, anyhow};
use gloo::console;

/// Raw `window.localStorage` access.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

/// Session store persisted in `localStorage`.
pub(crate) type BrowserSessionStore = PersistentSessionStore<BrowserStorage>;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| anyhow!("no window"))?
            .local_storage()
            .map_err(|err| anyhow!("localStorage unavailable: {err:?}"))?
            .ok_or_else(|| anyhow!("localStorage disabled"))
    }
}

impl KeyValueBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), String> {
        Self::storage()
            .and_then(|storage| {
                storage
                    .set_item(key, value)
                    .map_err(|err| anyhow!("write failed: {err:?}"))
            })
            .map_err(|err| {
                console::error!(format!("failed to persist {key}: {err}"));
                err.to_string()
            })
    }

    fn remove(&self, key: &str) {
        let removed = Self::storage().and_then(|storage| {
            storage
                .remove_item(key)
                .map_err(|err| anyhow!("remove failed: {err:?}"))
        });
        if let Err(err) = removed {
            console::error!(format!("failed to remove {key}: {err}"));
        }
    }
}
