// SPDX-License-Identifier: MPL-2.0
//! Results of backend calls and the tickets that route them back.

use super::Screen;
use crate::domain::{ActivityListing, FoodListing, UserIdentity};
use crate::error::Result;
use crate::ui::listing::Submission;

/// Identifies the screen visit a call was issued from.
///
/// `visit` increases on every navigation, so a result for a screen that was
/// left (even if it has been re-entered since) never matches again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub screen: Screen,
    pub visit: u64,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Registered(Result<UserIdentity>),
    Activities(Result<Vec<ActivityListing>>),
    Food(Result<Vec<FoodListing>>),
    Mutated {
        action: Submission,
        result: Result<()>,
    },
}

/// Toast keys for a mutation on `screen`: `(success, failure)`.
#[must_use]
pub fn mutation_keys(screen: Screen, action: Submission) -> (&'static str, &'static str) {
    match (screen, action) {
        (Screen::Activities, Submission::Create) => (
            "notification-activity-created",
            "notification-post-failed",
        ),
        (_, Submission::Create) => ("notification-recipe-posted", "notification-post-failed"),
        (_, Submission::Join) => ("notification-joined", "notification-join-failed"),
        (_, Submission::Comment) => (
            "notification-comment-added",
            "notification-comment-failed",
        ),
    }
}
