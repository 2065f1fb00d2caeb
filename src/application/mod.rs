// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//! - [`command`]: Command services (CQRS write-side)
//! - [`session`]: The locale and cached identity shared by every screen
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use majlis::application::command::create_post;
//! use majlis::domain::{PostDraft, PostKind};
//!
//! let draft = PostDraft::new("Picnic", "Sunday picnic");
//! create_post(remote.as_ref(), &identity, PostKind::Activity, &draft).await?;
//! ```

pub mod command;
pub mod port;
pub mod query;
pub mod session;
