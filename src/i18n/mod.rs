// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system.
//!
//! # Features
//!
//! - English and Arabic resources embedded at build time
//! - Runtime language switching through [`LocaleContext`]
//! - Missing keys fall back to the key itself, never to an error

pub mod dictionary;
pub mod locale_context;

pub use dictionary::Dictionary;
pub use locale_context::{resolve_initial_locale, LocaleContext};
