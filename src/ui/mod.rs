// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! owns its `State`, turns `Message`s into `Event`s for the parent, and
//! renders from a `ViewContext` carrying the locale.
//!
//! # Screens
//!
//! - [`onboarding`] - Name and age form that creates the account
//! - [`hub`] - Entry cards for food and activities
//! - [`activities`] - Activity list with join and create
//! - [`food`] - Recipe list with create and comments
//!
//! # Shared Infrastructure
//!
//! - [`listing`] - Idle/Loading/Loaded/Failed/Submitting state machine
//! - [`language_switch`] - English/Arabic toggle button
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod activities;
pub mod design_tokens;
pub mod food;
pub mod hub;
pub mod language_switch;
pub mod listing;
pub mod notifications;
pub mod onboarding;
pub mod styles;
pub mod theming;
