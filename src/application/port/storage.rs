// SPDX-License-Identifier: MPL-2.0
//! Local key/value storage port.
//!
//! Mirrors browser local storage: string keys, string values, values are
//! serialized by the caller. Nothing in this application removes keys.

use crate::error::Result;

/// Persistent string key/value store.
pub trait LocalStorage: Send + Sync {
    /// Returns the stored value for `key`, or `None` if it was never set.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
