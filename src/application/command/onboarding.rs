// SPDX-License-Identifier: MPL-2.0
//! Onboarding: create a backend account and cache the identity locally.
//!
//! Onboarding always creates a real (anonymous) backend account. The profile
//! row uses the new auth user id as its primary key, and the same
//! `{id, name, age}` record is cached under `userData`.

use crate::application::port::{RemoteCollection, Table};
use crate::application::session::IdentityStore;
use crate::domain::{OnboardingForm, UserIdentity};
use crate::error::Result;
use serde_json::json;

/// Registers a new user from the onboarding form.
///
/// Nothing is cached unless both the sign-up and the profile insert succeed.
pub async fn register(
    remote: &dyn RemoteCollection,
    identities: &IdentityStore,
    form: &OnboardingForm,
) -> Result<UserIdentity> {
    let profile = form.validate()?;

    let user_id = remote.sign_up().await?;
    remote
        .insert(
            Table::Profiles,
            json!({
                "id": user_id,
                "name": profile.name,
                "age": profile.age,
            }),
        )
        .await?;

    let identity = UserIdentity::new(user_id, profile.name, profile.age);
    identities.save(&identity)?;
    tracing::info!(user_id = %identity.id, "onboarding complete");
    Ok(identity)
}
