// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`supabase`]: Hosted backend over HTTP (implements [`RemoteCollection`])
//! - [`storage`]: CBOR file and in-memory key/value stores (implement [`LocalStorage`])
//!
//! [`RemoteCollection`]: crate::application::port::RemoteCollection
//! [`LocalStorage`]: crate::application::port::LocalStorage

pub mod storage;
pub mod supabase;

pub use storage::{FileStorage, MemoryStorage};
pub use supabase::SupabaseClient;
