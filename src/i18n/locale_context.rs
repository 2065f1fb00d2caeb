// SPDX-License-Identifier: MPL-2.0
//! Session-scoped active locale bound to the resource dictionary.

use super::dictionary::Dictionary;
use crate::domain::Locale;

/// Holds the active locale and translates keys through the dictionary.
///
/// Created once at boot. The language switch is the only writer; every view
/// reads through [`LocaleContext::translate`]. The active locale is never
/// written to disk and resets on the next launch.
#[derive(Debug, Default)]
pub struct LocaleContext {
    dictionary: Dictionary,
    current: Locale,
}

impl LocaleContext {
    #[must_use]
    pub fn new(dictionary: Dictionary, initial: Locale) -> Self {
        Self {
            dictionary,
            current: initial,
        }
    }

    /// Returns the active locale.
    #[must_use]
    pub fn get(&self) -> Locale {
        self.current
    }

    /// Replaces the active locale. Views pick it up on their next render.
    pub fn set(&mut self, locale: Locale) {
        if locale != self.current {
            tracing::debug!(from = %self.current, to = %locale, "switching locale");
        }
        self.current = locale;
    }

    /// Switches between English and Arabic and returns the new locale.
    pub fn toggle(&mut self) -> Locale {
        self.set(self.current.other());
        self.current
    }

    /// Translates `key` in the active locale, falling back to `key`.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.dictionary.lookup(self.current, key)
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

/// Picks the initial locale: CLI flag, then config file, then English.
///
/// Unsupported tags are skipped rather than rejected.
#[must_use]
pub fn resolve_initial_locale(cli_lang: Option<&str>, config_lang: Option<&str>) -> Locale {
    [cli_lang, config_lang]
        .into_iter()
        .flatten()
        .find_map(|tag| tag.parse::<Locale>().ok())
        .unwrap_or_default()
}
