// SPDX-License-Identifier: MPL-2.0
//! Post, participation and comment mutations.

use crate::application::port::{RemoteCollection, Table};
use crate::domain::{CommentDraft, PostDraft, PostId, PostKind, UserIdentity};
use crate::error::Result;
use serde_json::json;

/// Publishes a new recipe or activity authored by `author`.
pub async fn create_post(
    remote: &dyn RemoteCollection,
    author: &UserIdentity,
    kind: PostKind,
    draft: &PostDraft,
) -> Result<()> {
    draft.validate()?;
    remote
        .insert(
            Table::Posts,
            json!({
                "user_id": author.id,
                "type": kind,
                "title": draft.title,
                "description": draft.description,
            }),
        )
        .await?;
    tracing::info!(user_id = %author.id, kind = kind.as_str(), "post created");
    Ok(())
}

/// Adds `user` to the participants of an activity.
///
/// Joining twice is not prevented here; the backend decides.
pub async fn join_activity(
    remote: &dyn RemoteCollection,
    user: &UserIdentity,
    post: &PostId,
) -> Result<()> {
    remote
        .insert(
            Table::Participants,
            json!({
                "post_id": post,
                "user_id": user.id,
            }),
        )
        .await?;
    tracing::info!(user_id = %user.id, post_id = %post, "joined activity");
    Ok(())
}

/// Comments on a food post.
pub async fn add_comment(
    remote: &dyn RemoteCollection,
    author: &UserIdentity,
    post: &PostId,
    draft: &CommentDraft,
) -> Result<()> {
    draft.validate()?;
    remote
        .insert(
            Table::Comments,
            json!({
                "post_id": post,
                "user_id": author.id,
                "content": draft.content,
            }),
        )
        .await?;
    tracing::info!(user_id = %author.id, post_id = %post, "comment added");
    Ok(())
}
