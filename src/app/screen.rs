// SPDX-License-Identifier: MPL-2.0
//! Screens and the routes that lead to them.

use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Hub,
    Food,
    Activities,
}

/// Addressable locations, mirroring the web paths of the hosted app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`: hub when an identity is cached, onboarding otherwise.
    #[default]
    Root,
    UserInfo,
    Main,
    Food,
    Activities,
    /// `/activities/new`: activities with the create form open.
    NewActivity,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::UserInfo => "/user-info",
            Route::Main => "/main",
            Route::Food => "/food",
            Route::Activities => "/activities",
            Route::NewActivity => "/activities/new",
        }
    }

    /// Screen this route shows, and whether the create form starts open.
    ///
    /// Only the root route looks at the session; the others open as asked
    /// and gate individual actions instead.
    #[must_use]
    pub fn resolve(self, has_session: bool) -> (Screen, bool) {
        match self {
            Route::Root if has_session => (Screen::Hub, false),
            Route::Root | Route::UserInfo => (Screen::Onboarding, false),
            Route::Main => (Screen::Hub, false),
            Route::Food => (Screen::Food, false),
            Route::Activities => (Screen::Activities, false),
            Route::NewActivity => (Screen::Activities, true),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let path = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match path {
            "" | "/" => Ok(Route::Root),
            "/user-info" => Ok(Route::UserInfo),
            "/main" => Ok(Route::Main),
            "/food" => Ok(Route::Food),
            "/activities" => Ok(Route::Activities),
            "/activities/new" => Ok(Route::NewActivity),
            _ => Err(UnknownRoute(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_depends_on_session() {
        assert_eq!(Route::Root.resolve(true), (Screen::Hub, false));
        assert_eq!(Route::Root.resolve(false), (Screen::Onboarding, false));
    }

    #[test]
    fn new_activity_opens_form() {
        assert_eq!(Route::NewActivity.resolve(true), (Screen::Activities, true));
        assert_eq!(Route::Activities.resolve(true), (Screen::Activities, false));
    }

    #[test]
    fn paths_parse_back() {
        for route in [
            Route::Root,
            Route::UserInfo,
            Route::Main,
            Route::Food,
            Route::Activities,
            Route::NewActivity,
        ] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
        assert_eq!("/food/".parse::<Route>(), Ok(Route::Food));
        assert!("/settings".parse::<Route>().is_err());
    }
}
