// SPDX-License-Identifier: MPL-2.0
//! Display language selector.
//!
//! The application ships exactly two locales. Everything that needs to know
//! about text direction or the BCP-47 tag goes through [`Locale`] rather than
//! passing raw strings around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Active display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the session default.
    #[default]
    En,
    /// Arabic.
    Ar,
}

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// Returns the short language tag (`en`, `ar`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Locale::En => Direction::LeftToRight,
            Locale::Ar => Direction::RightToLeft,
        }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::RightToLeft
    }

    /// Returns the locale the language switch offers next.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language tag is not one of the supported locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLocale {}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts bare tags and regional variants (`en-US`, `ar_EG`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn parses_regional_variants() {
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ar_EG".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
    }

    #[test]
    fn other_is_an_involution() {
        for locale in Locale::ALL {
            assert_eq!(locale.other().other(), locale);
            assert_ne!(locale.other(), locale);
        }
    }
}
