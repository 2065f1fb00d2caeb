// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains the reads behind the listing screens. They do not
//! modify state; they fetch from the remote collection and decode the rows.
//!
//! # Available Services
//!
//! - [`listings`]: Activity and food listings

pub mod listings;

pub use listings::{activities_query, fetch_activities, fetch_food_posts, food_query};
