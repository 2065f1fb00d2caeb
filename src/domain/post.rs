// SPDX-License-Identifier: MPL-2.0
//! Posts, participants and comments as the views consume them.
//!
//! These are the typed shapes of the two listing queries. Rows coming back
//! from the backend are decoded into them at the client boundary so the view
//! layer never handles open-ended JSON.

use super::identity::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two kinds of post, stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Food,
    Activity,
}

impl PostKind {
    /// Column value used in filters and inserts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PostKind::Food => "food",
            PostKind::Activity => "activity",
        }
    }
}

/// A post as stored in the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub kind: PostKind,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// An activity with its author's display name and participant ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListing {
    pub post: Post,
    pub author_name: Option<String>,
    pub participants: Vec<UserId>,
}

impl ActivityListing {
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn has_participant(&self, user: &UserId) -> bool {
        self.participants.iter().any(|p| p == user)
    }
}

/// A comment under a food post, with its author's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub post_id: PostId,
    pub author_id: UserId,
    pub author_name: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A recipe post with its author's display name and comments (oldest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodListing {
    pub post: Post,
    pub author_name: Option<String>,
    pub comments: Vec<Comment>,
}
