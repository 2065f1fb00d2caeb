// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and the main window.

use crate::ui::theming::ThemeMode;

// ==========================================================================
// General
// ==========================================================================

/// Theme used when `settings.toml` does not pick one.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::Light;

// ==========================================================================
// Backend
// ==========================================================================

/// Environment variable overriding `[backend] url`.
pub const ENV_SUPABASE_URL: &str = "MAJLIS_SUPABASE_URL";

/// Environment variable overriding `[backend] anon_key`.
pub const ENV_SUPABASE_ANON_KEY: &str = "MAJLIS_SUPABASE_ANON_KEY";

// ==========================================================================
// Window
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
