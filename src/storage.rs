//! Key-value persistence port over browser local storage.
//!
//! Each widget controller owns exactly one key; render code never touches
//! storage directly. Missing or malformed records fall back to defaults so
//! a broken payload can never break the page.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const CHALLENGE_KEY: &str = "nut-challenge";
pub const GAME_STATS_KEY: &str = "nut-game-stats";

pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Local-storage backend. Storage that is absent or blocked (e.g. private
/// browsing) degrades to a no-op store.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KvStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(store) = Self::raw() {
            let _ = store.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(store) = Self::raw() {
            let _ = store.remove_item(key);
        }
    }
}

pub fn load<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding malformed record under {key}: {err}");
            None
        }
    }
}

pub fn save<T: Serialize>(store: &impl KvStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => log::warn!("failed to serialize record for {key}: {err}"),
    }
}
