// SPDX-License-Identifier: MPL-2.0
//! Listing queries for the activities and food screens.
//!
//! Each query has a fixed projection. The raw rows are decoded into
//! [`ActivityListing`] / [`FoodListing`] right here, so a response with an
//! unexpected shape fails as a remote error instead of leaking into views.

use crate::application::port::{RemoteCollection, SelectQuery, Table};
use crate::domain::{
    ActivityListing, Comment, FoodListing, Post, PostId, PostKind, UserId,
};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Activity posts with author name and participant ids.
pub const ACTIVITY_COLUMNS: &str = "*,profiles:user_id(name),participants(user_id)";

/// Food posts with author name and comments (each with its author name).
pub const FOOD_COLUMNS: &str =
    "*,profiles:profiles(name),comments:comments(id,post_id,user_id,content,created_at,profiles:profiles(name))";

#[derive(Debug, Deserialize)]
struct AuthorRow {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ParticipantRow {
    user_id: UserId,
}

#[derive(Debug, Deserialize)]
struct CommentRow {
    id: String,
    post_id: PostId,
    user_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    profiles: Option<AuthorRow>,
}

#[derive(Debug, Deserialize)]
struct PostRow {
    id: PostId,
    user_id: UserId,
    #[serde(rename = "type")]
    kind: PostKind,
    title: String,
    #[serde(default)]
    description: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    profiles: Option<AuthorRow>,
    #[serde(default)]
    participants: Vec<ParticipantRow>,
    #[serde(default)]
    comments: Vec<CommentRow>,
}

impl PostRow {
    fn split(self) -> (Post, Option<String>, Vec<ParticipantRow>, Vec<CommentRow>) {
        let post = Post {
            id: self.id,
            author_id: self.user_id,
            kind: self.kind,
            title: self.title,
            description: self.description.unwrap_or_default(),
            created_at: self.created_at,
        };
        let author = self.profiles.and_then(|p| p.name);
        (post, author, self.participants, self.comments)
    }
}

/// Read used by the activities screen, newest first.
#[must_use]
pub fn activities_query() -> SelectQuery {
    posts_query(PostKind::Activity, ACTIVITY_COLUMNS)
}

/// Read used by the food screen, newest first.
#[must_use]
pub fn food_query() -> SelectQuery {
    posts_query(PostKind::Food, FOOD_COLUMNS)
}

fn posts_query(kind: PostKind, columns: &str) -> SelectQuery {
    SelectQuery::from(Table::Posts)
        .columns(columns)
        .eq("type", kind.as_str())
        .order("created_at", false)
}

/// Fetches every activity post.
pub async fn fetch_activities(remote: &dyn RemoteCollection) -> Result<Vec<ActivityListing>> {
    let rows = remote.select(&activities_query()).await?;
    let listings = decode_posts(rows, PostKind::Activity)?
        .into_iter()
        .map(|row| {
            let (post, author_name, participants, _) = row.split();
            ActivityListing {
                post,
                author_name,
                participants: participants.into_iter().map(|p| p.user_id).collect(),
            }
        })
        .collect::<Vec<_>>();
    tracing::debug!(count = listings.len(), "fetched activities");
    Ok(listings)
}

/// Fetches every food post with its comments.
pub async fn fetch_food_posts(remote: &dyn RemoteCollection) -> Result<Vec<FoodListing>> {
    let rows = remote.select(&food_query()).await?;
    let listings = decode_posts(rows, PostKind::Food)?
        .into_iter()
        .map(|row| {
            let (post, author_name, _, comment_rows) = row.split();
            let mut comments: Vec<Comment> = comment_rows
                .into_iter()
                .map(|c| Comment {
                    id: c.id,
                    post_id: c.post_id,
                    author_id: c.user_id,
                    author_name: c.profiles.and_then(|p| p.name),
                    content: c.content,
                    created_at: c.created_at,
                })
                .collect();
            comments.sort_by_key(|c| c.created_at);
            FoodListing {
                post,
                author_name,
                comments,
            }
        })
        .collect::<Vec<_>>();
    tracing::debug!(count = listings.len(), "fetched food posts");
    Ok(listings)
}

/// Decodes raw rows, dropping any whose kind does not match the filter.
fn decode_posts(rows: Vec<Value>, expected: PostKind) -> Result<Vec<PostRow>> {
    let mut decoded = Vec::with_capacity(rows.len());
    for row in rows {
        let row: PostRow = serde_json::from_value(row)?;
        if row.kind == expected {
            decoded.push(row);
        } else {
            tracing::warn!(post_id = %row.id, kind = ?row.kind, "ignoring post of unexpected kind");
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::FakeBackend;
    use serde_json::json;

    #[test]
    fn activity_query_filters_and_orders() {
        let query = activities_query();
        assert_eq!(query.table, Table::Posts);
        assert_eq!(query.filter_value("type"), Some("activity"));
        assert_eq!(query.columns, ACTIVITY_COLUMNS);
        let order = query.order.expect("ordered");
        assert_eq!(order.column, "created_at");
        assert!(!order.ascending);
    }

    #[test]
    fn decodes_embedded_relations() {
        let rows = vec![json!({
            "id": "p-1",
            "user_id": "u-1",
            "type": "activity",
            "title": "Picnic",
            "description": null,
            "created_at": "2024-05-01T10:00:00+00:00",
            "profiles": { "name": "Alice" },
            "participants": [{ "user_id": "u-2" }, { "user_id": "u-3" }]
        })];
        let decoded = decode_posts(rows, PostKind::Activity).expect("decode");
        assert_eq!(decoded.len(), 1);
        let (post, author, participants, _) = decoded.into_iter().next().expect("row").split();
        assert_eq!(post.title, "Picnic");
        assert_eq!(post.description, "");
        assert_eq!(author.as_deref(), Some("Alice"));
        assert_eq!(participants.len(), 2);
    }

    #[test]
    fn malformed_rows_are_remote_errors() {
        let rows = vec![json!({ "id": "p-1", "title": 5 })];
        let err = decode_posts(rows, PostKind::Food).expect_err("missing fields");
        assert!(matches!(err, Error::Remote(_)));
    }

    #[test]
    fn rows_of_other_kind_are_dropped() {
        let rows = vec![json!({
            "id": "p-9",
            "user_id": "u-1",
            "type": "food",
            "title": "Soup",
            "description": "Hot",
            "created_at": "2024-05-01T10:00:00Z"
        })];
        assert!(decode_posts(rows, PostKind::Activity)
            .expect("decode")
            .is_empty());
    }

    #[tokio::test]
    async fn fetch_food_posts_sorts_comments_oldest_first() {
        let backend = FakeBackend::new();
        backend.seed_profile("u-1", "Alice", 30);
        backend.seed_profile("u-2", "Bob", 41);
        let post = backend.seed_post("u-1", PostKind::Food, "Soup", "Lentil soup");
        backend.seed_comment(&post, "u-2", "second");
        backend.seed_comment(&post, "u-1", "third");

        let listings = fetch_food_posts(&backend).await.expect("fetch");
        assert_eq!(listings.len(), 1);
        let listing = &listings[0];
        assert_eq!(listing.author_name.as_deref(), Some("Alice"));
        let contents: Vec<_> = listing.comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, ["second", "third"]);
        assert_eq!(listing.comments[0].author_name.as_deref(), Some("Bob"));
        assert_eq!(listing.comments[0].author_id, UserId::new("u-2"));
        assert!(listing.comments.iter().all(|c| c.post_id == post));
    }

    #[tokio::test]
    async fn fetch_activities_is_newest_first() {
        let backend = FakeBackend::new();
        backend.seed_profile("u-1", "Alice", 30);
        backend.seed_post("u-1", PostKind::Activity, "Older", "a");
        backend.seed_post("u-1", PostKind::Activity, "Newer", "b");
        backend.seed_post("u-1", PostKind::Food, "Not an activity", "c");

        let titles: Vec<_> = fetch_activities(&backend)
            .await
            .expect("fetch")
            .into_iter()
            .map(|a| a.post.title)
            .collect();
        assert_eq!(titles, ["Newer", "Older"]);
    }

    #[tokio::test]
    async fn fetch_activities_lists_participants() {
        let backend = FakeBackend::new();
        backend.seed_profile("u-1", "Alice", 30);
        backend.seed_profile("u-2", "Bob", 41);
        let picnic = backend.seed_post("u-1", PostKind::Activity, "Picnic", "Sunday picnic");
        backend.seed_post("u-1", PostKind::Activity, "Hike", "Early start");
        backend.seed_participant(&picnic, "u-2");

        let listings = fetch_activities(&backend).await.expect("fetch");
        let picnic = listings
            .iter()
            .find(|a| a.post.title == "Picnic")
            .expect("picnic listed");
        assert_eq!(picnic.participant_count(), 1);
        assert!(picnic.has_participant(&UserId::new("u-2")));
        assert!(!picnic.has_participant(&UserId::new("u-1")));

        let hike = listings
            .iter()
            .find(|a| a.post.title == "Hike")
            .expect("hike listed");
        assert_eq!(hike.participant_count(), 0);
    }

    #[tokio::test]
    async fn select_failure_propagates() {
        let backend = FakeBackend::new();
        backend.fail_selects(true);
        assert!(matches!(
            fetch_activities(&backend).await,
            Err(Error::Remote(_))
        ));
    }
}
