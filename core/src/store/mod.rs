//! Local persistence adapter.
//!
//! RULE: Views read and write persisted state only through `LocalStorage`.
//! Values are JSON documents under string keys; last writer wins.

use crate::error::ManagerResult;
use serde::{de::DeserializeOwned, Serialize};

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::ProfileStore;

/// Storage keys shared by the pages.
pub mod keys {
    pub const TEAM: &str = "team";
    pub const INITIAL_BUDGET: &str = "initialBudget";
    pub const TRANSACTIONS: &str = "transactions";
}

/// A browser-style key-value area holding serialized strings.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> ManagerResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> ManagerResult<()>;
    fn remove_item(&self, key: &str) -> ManagerResult<()>;
}

/// Typed JSON access on top of any `LocalStorage`.
pub trait StorageExt: LocalStorage {
    /// The stored value, or `default` when the key is absent, empty,
    /// unreadable, or not a valid `T`. Never fails.
    fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return default,
            Err(e) => {
                log::warn!("Reading '{key}' failed, using default: {e}");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Stored '{key}' is corrupt, using default: {e}");
                default
            }
        }
    }

    /// Serialize `value` and overwrite whatever is stored under `key`.
    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ManagerResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_item(key, &json)
    }
}

impl<S: LocalStorage + ?Sized> StorageExt for S {}
