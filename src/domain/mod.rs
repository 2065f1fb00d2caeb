// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core types with no I/O.
//!
//! This module contains the value objects every other layer speaks in.
//! Nothing here touches the network, the disk or the UI toolkit.
//!
//! # Modules
//!
//! - [`locale`]: Display language ([`Locale`](locale::Locale)) and text direction
//! - [`identity`]: Cached user identity ([`UserIdentity`](identity::UserIdentity))
//! - [`post`]: Posts and the typed listing shapes
//!   ([`ActivityListing`](post::ActivityListing), [`FoodListing`](post::FoodListing))
//! - [`draft`]: Form input and validation ([`PostDraft`](draft::PostDraft),
//!   [`OnboardingForm`](draft::OnboardingForm))

pub mod draft;
pub mod identity;
pub mod locale;
pub mod post;

pub use draft::{CommentDraft, Field, OnboardingForm, PostDraft, Profile};
pub use identity::{UserId, UserIdentity};
pub use locale::{Direction, Locale};
pub use post::{ActivityListing, Comment, FoodListing, Post, PostId, PostKind};
