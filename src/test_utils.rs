// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! [`FakeBackend`] is an in-memory [`RemoteCollection`] that answers the same
//! embedded-relation selects as the hosted backend and records every call.

use crate::application::port::{RemoteCollection, SelectQuery, Table};
use crate::domain::{PostId, PostKind, UserId};
use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use std::sync::Mutex;

/// A call observed by [`FakeBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    Select(Table),
    Insert { table: Table, record: Value },
    SignUp,
}

#[derive(Debug, Default)]
struct Rows {
    profiles: Vec<Value>,
    posts: Vec<Value>,
    participants: Vec<Value>,
    comments: Vec<Value>,
    tick: i64,
    next_user: u32,
}

impl Rows {
    fn stamp(&mut self) -> (String, String) {
        self.tick += 1;
        let at = DateTime::<Utc>::from_timestamp(1_700_000_000 + self.tick * 60, 0)
            .expect("valid timestamp");
        (format!("row-{}", self.tick), at.to_rfc3339())
    }

    fn profile_name(&self, user_id: &Value) -> Value {
        self.profiles
            .iter()
            .find(|p| &p["id"] == user_id)
            .map_or(Value::Null, |p| json!({ "name": p["name"] }))
    }

    fn embed_post(&self, post: &Value) -> Value {
        let mut row = post.clone();
        let id = &post["id"];
        let participants: Vec<Value> = self
            .participants
            .iter()
            .filter(|p| &p["post_id"] == id)
            .map(|p| json!({ "user_id": p["user_id"] }))
            .collect();
        let comments: Vec<Value> = self
            .comments
            .iter()
            .filter(|c| &c["post_id"] == id)
            .map(|c| {
                json!({
                    "id": c["id"],
                    "post_id": c["post_id"],
                    "user_id": c["user_id"],
                    "content": c["content"],
                    "created_at": c["created_at"],
                    "profiles": self.profile_name(&c["user_id"]),
                })
            })
            .collect();
        if let Value::Object(map) = &mut row {
            map.insert("profiles".into(), self.profile_name(&post["user_id"]));
            map.insert("participants".into(), Value::Array(participants));
            map.insert("comments".into(), Value::Array(comments));
        }
        row
    }

    fn table(&mut self, table: Table) -> &mut Vec<Value> {
        match table {
            Table::Profiles => &mut self.profiles,
            Table::Posts => &mut self.posts,
            Table::Participants => &mut self.participants,
            Table::Comments => &mut self.comments,
        }
    }
}

/// In-memory stand-in for the hosted backend.
#[derive(Debug, Default)]
pub struct FakeBackend {
    rows: Mutex<Rows>,
    calls: Mutex<Vec<RemoteCall>>,
    fail_inserts: Mutex<bool>,
    fail_selects: Mutex<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far, oldest first.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn fail_inserts(&self, fail: bool) {
        *self.fail_inserts.lock().expect("flag lock") = fail;
    }

    pub fn fail_selects(&self, fail: bool) {
        *self.fail_selects.lock().expect("flag lock") = fail;
    }

    pub fn seed_profile(&self, id: &str, name: &str, age: u8) {
        let mut rows = self.rows.lock().expect("rows lock");
        rows.profiles.push(json!({ "id": id, "name": name, "age": age }));
    }

    /// Adds a post; later seeds are newer.
    pub fn seed_post(&self, user_id: &str, kind: PostKind, title: &str, description: &str) -> PostId {
        let mut rows = self.rows.lock().expect("rows lock");
        let (id, created_at) = rows.stamp();
        rows.posts.push(json!({
            "id": id,
            "user_id": user_id,
            "type": kind,
            "title": title,
            "description": description,
            "created_at": created_at,
        }));
        PostId::new(id)
    }

    pub fn seed_participant(&self, post: &PostId, user_id: &str) {
        let mut rows = self.rows.lock().expect("rows lock");
        rows.participants
            .push(json!({ "post_id": post, "user_id": user_id }));
    }

    /// Adds a comment; later seeds are newer.
    pub fn seed_comment(&self, post: &PostId, user_id: &str, content: &str) {
        let mut rows = self.rows.lock().expect("rows lock");
        let (id, created_at) = rows.stamp();
        rows.comments.push(json!({
            "id": id,
            "post_id": post,
            "user_id": user_id,
            "content": content,
            "created_at": created_at,
        }));
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

fn matches_filters(row: &Value, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(column, value)| match &row[column] {
        Value::String(s) => s == value,
        other => other.to_string() == *value,
    })
}

#[async_trait]
impl RemoteCollection for FakeBackend {
    async fn select(&self, query: &SelectQuery) -> Result<Vec<Value>> {
        self.record(RemoteCall::Select(query.table));
        if *self.fail_selects.lock().expect("flag lock") {
            return Err(Error::Remote("select refused".into()));
        }

        let mut rows = self.rows.lock().expect("rows lock");
        let source = rows.table(query.table).clone();
        let mut selected: Vec<Value> = source
            .into_iter()
            .filter(|row| matches_filters(row, &query.filters))
            .collect();

        if let Some(order) = &query.order {
            selected.sort_by(|a, b| {
                let a = a[&order.column].as_str().unwrap_or_default();
                let b = b[&order.column].as_str().unwrap_or_default();
                if order.ascending {
                    a.cmp(b)
                } else {
                    b.cmp(a)
                }
            });
        }

        if query.table == Table::Posts {
            selected = selected.iter().map(|post| rows.embed_post(post)).collect();
        }
        Ok(selected)
    }

    async fn insert(&self, table: Table, record: Value) -> Result<()> {
        self.record(RemoteCall::Insert {
            table,
            record: record.clone(),
        });
        if *self.fail_inserts.lock().expect("flag lock") {
            return Err(Error::Remote("insert refused".into()));
        }

        let mut rows = self.rows.lock().expect("rows lock");
        let mut stored: Map<String, Value> = match record {
            Value::Object(map) => map,
            other => return Err(Error::Remote(format!("not a row: {other}"))),
        };
        if table != Table::Profiles {
            let (id, created_at) = rows.stamp();
            stored.entry("id").or_insert(Value::String(id));
            stored
                .entry("created_at")
                .or_insert(Value::String(created_at));
        }
        rows.table(table).push(Value::Object(stored));
        Ok(())
    }

    async fn sign_up(&self) -> Result<UserId> {
        self.record(RemoteCall::SignUp);
        let mut rows = self.rows.lock().expect("rows lock");
        rows.next_user += 1;
        Ok(UserId::new(format!("user-{}", rows.next_user)))
    }
}
