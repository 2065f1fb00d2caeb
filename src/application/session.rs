// SPDX-License-Identifier: MPL-2.0
//! Current session context.
//!
//! The active locale and the cached identity are bundled into one
//! [`SessionContext`] that the root application owns and hands to views and
//! use cases explicitly. Tests substitute in-memory storage.

use super::port::LocalStorage;
use crate::domain::UserIdentity;
use crate::error::{Error, Result};
use crate::i18n::LocaleContext;
use std::sync::Arc;

/// Local storage key holding the serialized [`UserIdentity`].
pub const USER_DATA_KEY: &str = "userData";

/// Reads and writes the identity cached in local storage.
#[derive(Clone)]
pub struct IdentityStore {
    storage: Arc<dyn LocalStorage>,
}

impl std::fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityStore").finish_non_exhaustive()
    }
}

impl IdentityStore {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Whether a `userData` entry exists. This alone decides whether the
    /// root route opens the hub or onboarding.
    #[must_use]
    pub fn has_session(&self) -> bool {
        match self.storage.get_item(USER_DATA_KEY) {
            Ok(value) => value.is_some(),
            Err(err) => {
                tracing::warn!(%err, "could not read session marker");
                false
            }
        }
    }

    /// Returns the cached identity, if any.
    pub fn current(&self) -> Result<Option<UserIdentity>> {
        let Some(raw) = self.storage.get_item(USER_DATA_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| Error::Storage(format!("malformed {USER_DATA_KEY}: {err}")))
    }

    /// Returns the cached identity or [`Error::SessionMissing`].
    ///
    /// An unreadable entry counts as missing: the user is sent back through
    /// onboarding, which overwrites it.
    pub fn require(&self) -> Result<UserIdentity> {
        match self.current() {
            Ok(Some(identity)) => Ok(identity),
            Ok(None) => Err(Error::SessionMissing),
            Err(err) => {
                tracing::warn!(%err, "discarding unreadable identity");
                Err(Error::SessionMissing)
            }
        }
    }

    /// Caches `identity` under [`USER_DATA_KEY`].
    pub fn save(&self, identity: &UserIdentity) -> Result<()> {
        let raw = serde_json::to_string(identity)
            .map_err(|err| Error::Storage(err.to_string()))?;
        self.storage.set_item(USER_DATA_KEY, &raw)?;
        tracing::info!(user_id = %identity.id, "cached user identity");
        Ok(())
    }
}

/// Everything a view or use case needs to know about the current session.
#[derive(Debug)]
pub struct SessionContext {
    pub locale: LocaleContext,
    pub identity: IdentityStore,
}

impl SessionContext {
    #[must_use]
    pub fn new(locale: LocaleContext, identity: IdentityStore) -> Self {
        Self { locale, identity }
    }

    /// Shorthand for `self.locale.translate(key)`.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.locale.translate(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::infrastructure::storage::MemoryStorage;

    fn store() -> (Arc<MemoryStorage>, IdentityStore) {
        let storage = Arc::new(MemoryStorage::default());
        (storage.clone(), IdentityStore::new(storage))
    }

    #[test]
    fn empty_storage_has_no_session() {
        let (_, identities) = store();
        assert!(!identities.has_session());
        assert_eq!(identities.current(), Ok(None));
        assert_eq!(identities.require(), Err(Error::SessionMissing));
    }

    #[test]
    fn saved_identity_is_read_back() {
        let (storage, identities) = store();
        let alice = UserIdentity::new(UserId::new("u-1"), "Alice", 30);
        identities.save(&alice).expect("save identity");

        assert!(identities.has_session());
        assert_eq!(identities.require(), Ok(alice));

        let raw = storage
            .get_item(USER_DATA_KEY)
            .expect("read raw")
            .expect("entry present");
        let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["age"], 30);
    }

    #[test]
    fn malformed_entry_counts_as_missing_identity() {
        let (storage, identities) = store();
        storage
            .set_item(USER_DATA_KEY, "{not json")
            .expect("write garbage");

        assert!(identities.has_session());
        assert!(matches!(identities.current(), Err(Error::Storage(_))));
        assert_eq!(identities.require(), Err(Error::SessionMissing));
    }
}
