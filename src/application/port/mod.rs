// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`remote`]: Backend reads, inserts and account creation
//! - [`storage`]: Local key/value persistence
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so they can be shared via `Arc` with Iced tasks
//! - Remote calls are `async` (through `async_trait`) and run on the tokio runtime
//! - Methods return the crate [`Result`](crate::error::Result)

pub mod remote;
pub mod storage;

pub use remote::{Order, RemoteCollection, SelectQuery, Table};
pub use storage::LocalStorage;
