// SPDX-License-Identifier: MPL-2.0
//! Locally cached user identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned user identifier (the auth user id, also the profile id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Age bounds accepted by the onboarding form.
pub mod age_bounds {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 120;
}

/// The identity created at onboarding and cached under the `userData` key.
///
/// Serialized as `{"id": "...", "name": "...", "age": 30}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub name: String,
    pub age: u8,
}

impl UserIdentity {
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, age: u8) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_serializes_with_numeric_age() {
        let identity = UserIdentity::new(UserId::new("u-1"), "Alice", 30);
        let json = serde_json::to_value(&identity).expect("serialize identity");
        assert_eq!(
            json,
            serde_json::json!({ "id": "u-1", "name": "Alice", "age": 30 })
        );
    }

    #[test]
    fn user_id_is_transparent() {
        let id: UserId = serde_json::from_str("\"abc\"").expect("parse id");
        assert_eq!(id.as_str(), "abc");
    }
}
