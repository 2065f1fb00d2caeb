// SPDX-License-Identifier: MPL-2.0
//! Command services (CQRS write-side).
//!
//! Every command validates its input before touching the backend and takes
//! the acting [`UserIdentity`](crate::domain::UserIdentity) by reference, so
//! a mutation cannot be issued without a cached identity.
//!
//! # Available Services
//!
//! - [`onboarding`]: Account creation and identity caching
//! - [`posts`]: Creating posts, joining activities, commenting

pub mod onboarding;
pub mod posts;

pub use onboarding::register;
pub use posts::{add_comment, create_post, join_activity};
