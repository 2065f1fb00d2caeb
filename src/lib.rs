// SPDX-License-Identifier: MPL-2.0
//! `majlis` is a bilingual (English/Arabic) client for sharing recipes and
//! activities, built with the Iced GUI framework.
//!
//! Layers, from the inside out:
//!
//! - [`domain`]: identities, posts, drafts and locales
//! - [`application`]: ports, listing queries, commands and the session
//! - [`infrastructure`]: the Supabase client and on-disk storage
//! - [`i18n`]: Fluent dictionaries and the locale context
//! - [`ui`] and [`app`]: Iced screens and the root application

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
