// SPDX-License-Identifier: MPL-2.0
//! Remote collection port.
//!
//! This is the boundary to the hosted backend: table reads, row inserts and
//! anonymous account creation. Infrastructure adapters implement
//! [`RemoteCollection`]; use cases only ever see this trait.

use crate::domain::UserId;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Backend tables this application reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Profiles,
    Posts,
    Participants,
    Comments,
}

impl Table {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Table::Profiles => "profiles",
            Table::Posts => "posts",
            Table::Participants => "participants",
            Table::Comments => "comments",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort key of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// A read against one table with equality filters, ordering and a
/// projection that may embed related rows (`*,profiles:user_id(name)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub table: Table,
    pub columns: String,
    pub filters: Vec<(String, String)>,
    pub order: Option<Order>,
}

impl SelectQuery {
    /// Selects every column of `table`.
    #[must_use]
    pub fn from(table: Table) -> Self {
        Self {
            table,
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    #[must_use]
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Adds a `column = value` filter. Filters are combined with AND.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    #[must_use]
    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.into(),
            ascending,
        });
        self
    }

    /// Returns the value of the first filter on `column`, if any.
    #[must_use]
    pub fn filter_value(&self, column: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }
}

/// Query/mutate facade over the hosted backend.
///
/// No transactions, pagination or partial-failure handling: any failure is
/// reported as a single [`Error::Remote`](crate::error::Error::Remote).
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Runs a read and returns the raw rows. Callers decode them into typed
    /// records immediately.
    async fn select(&self, query: &SelectQuery) -> Result<Vec<Value>>;

    /// Inserts one row into `table`.
    async fn insert(&self, table: Table, record: Value) -> Result<()>;

    /// Creates an anonymous backend account and returns its user id.
    async fn sign_up(&self) -> Result<UserId>;
}
