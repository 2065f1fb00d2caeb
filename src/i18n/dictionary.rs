// SPDX-License-Identifier: MPL-2.0
//! Resource dictionary: `(Locale, key) -> string`.
//!
//! Translations live in `assets/i18n/<code>.ftl` and are embedded into the
//! binary, so the dictionary is fixed at build time. Messages are plain
//! Fluent messages without variables; each phrase has its own key.

use crate::domain::Locale;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Static lookup table from locale and resource key to display string.
pub struct Dictionary {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    keys: HashMap<Locale, Vec<String>>,
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Dictionary {
    /// Builds the dictionary from the `.ftl` files embedded at build time.
    #[must_use]
    pub fn embedded() -> Self {
        let sources = Locale::ALL.into_iter().filter_map(|locale| {
            let filename = format!("{}.ftl", locale.code());
            match Asset::get(&filename) {
                Some(file) => Some((
                    locale,
                    String::from_utf8_lossy(file.data.as_ref()).into_owned(),
                )),
                None => {
                    tracing::warn!(%locale, "no embedded translation file");
                    None
                }
            }
        });
        Self::from_sources(sources)
    }

    /// Builds a dictionary from Fluent sources, one per locale.
    ///
    /// Syntax errors are logged and the messages that did parse are kept.
    pub fn from_sources(sources: impl IntoIterator<Item = (Locale, String)>) -> Self {
        let mut bundles = HashMap::new();
        let mut keys = HashMap::new();

        for (locale, source) in sources {
            keys.insert(locale, message_ids(&source));

            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(%locale, ?errors, "translation file has syntax errors");
                    resource
                }
            };

            let langid: LanguageIdentifier = locale.code().parse().unwrap_or_default();
            let mut bundle = FluentBundle::new(vec![langid]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, ?errors, "duplicate translation entries");
            }
            bundles.insert(locale, bundle);
        }

        Self { bundles, keys }
    }

    /// Returns the localized string for `key`, or `key` itself when the
    /// locale has no such message. Never fails.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> String {
        let Some(bundle) = self.bundles.get(&locale) else {
            return key.to_string();
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return key.to_string();
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            value.into_owned()
        } else {
            key.to_string()
        }
    }

    /// Whether `locale` defines a message for `key`.
    #[must_use]
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.bundles
            .get(&locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    /// Message identifiers defined for `locale`, in file order.
    #[must_use]
    pub fn keys(&self, locale: Locale) -> &[String] {
        self.keys.get(&locale).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Collects top-level message identifiers (`id = value` lines).
fn message_ids(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| {
            let (id, _) = line.split_once('=')?;
            let id = id.trim_end();
            let mut chars = id.chars();
            let starts_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
            let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            (starts_ok && rest_ok).then(|| id.to_string())
        })
        .collect()
}
