// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens and the backend.
//!
//! The `App` owns the [`SessionContext`], the optional remote client and one
//! state per screen. Screens report intent as events; `App` checks the
//! cached identity, runs the backend call as a `Task` and routes the result
//! back to the screen that asked for it.

pub mod config;
mod effect;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use effect::{Outcome, Ticket};
pub use message::{Flags, Message};
pub use screen::{Route, Screen, UnknownRoute};

use crate::application::port::{LocalStorage, RemoteCollection};
use crate::application::session::{IdentityStore, SessionContext};
use crate::domain::UserIdentity;
use crate::i18n::{resolve_initial_locale, Dictionary, LocaleContext};
use crate::infrastructure::{FileStorage, MemoryStorage, SupabaseClient};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{activities, food, onboarding};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    session: SessionContext,
    remote: Option<Arc<dyn RemoteCollection>>,
    /// Identity shown in the UI. Mutations re-read it from storage.
    identity: Option<UserIdentity>,
    screen: Screen,
    /// Increases on every navigation; see [`Ticket`].
    visit: u64,
    onboarding: onboarding::State,
    activities: activities::State,
    food: food::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("visit", &self.visit)
            .field("locale", &self.session.locale.get())
            .field("has_remote", &self.remote.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and storage, connects the backend and opens the
    /// initial route.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut warnings: Vec<String> = config_warning.into_iter().collect();

        let locale = resolve_initial_locale(flags.lang.as_deref(), config.general.language.as_deref());
        let locale = LocaleContext::new(Dictionary::embedded(), locale);

        let storage: Arc<dyn LocalStorage> = match paths::get_app_data_dir() {
            Some(dir) => {
                let (storage, warning) = FileStorage::open(&dir);
                warnings.extend(warning);
                tracing::info!(path = %storage.path().display(), "using local storage");
                Arc::new(storage)
            }
            None => {
                tracing::warn!("no data directory, identity will not persist");
                warnings.push("notification-storage-error".to_string());
                Arc::new(MemoryStorage::default())
            }
        };

        let remote: Option<Arc<dyn RemoteCollection>> =
            match config.backend.with_env_overrides().resolve() {
                Some((url, anon_key)) => match SupabaseClient::new(&url, anon_key) {
                    Ok(client) => {
                        tracing::info!(%url, "backend configured");
                        Some(Arc::new(client.with_session_store(Arc::clone(&storage))))
                    }
                    Err(err) => {
                        tracing::warn!(%err, "invalid backend settings");
                        warnings.push(err.i18n_key().to_string());
                        None
                    }
                },
                None => {
                    tracing::warn!("backend url or anon key missing");
                    warnings.push("notification-backend-missing".to_string());
                    None
                }
            };

        let route = match flags.route.as_deref().map(str::parse::<Route>) {
            Some(Ok(route)) => route,
            Some(Err(err)) => {
                tracing::warn!(%err, "falling back to root route");
                Route::Root
            }
            None => Route::Root,
        };

        let session = SessionContext::new(locale, IdentityStore::new(storage));
        let (mut app, task) = Self::from_parts(session, remote, config.general.theme_mode, route);
        for key in warnings {
            app.notifications.push(Notification::warning(key));
        }
        (app, task)
    }

    /// Assembles an app from ready-made parts and navigates to `route`.
    pub fn from_parts(
        session: SessionContext,
        remote: Option<Arc<dyn RemoteCollection>>,
        theme_mode: ThemeMode,
        route: Route,
    ) -> (Self, Task<Message>) {
        let identity = session.identity.current().unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring unreadable identity");
            None
        });
        let mut app = Self {
            session,
            remote,
            identity,
            screen: Screen::Onboarding,
            visit: 0,
            onboarding: onboarding::State::default(),
            activities: activities::State::default(),
            food: food::State::default(),
            notifications: notifications::Manager::new(),
            theme_mode,
        };
        let task = app.navigate(route);
        (app, task)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The ticket results for the current screen visit must carry.
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        Ticket {
            screen: self.screen,
            visit: self.visit,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub fn onboarding(&self) -> &onboarding::State {
        &self.onboarding
    }

    #[must_use]
    pub fn activities(&self) -> &activities::State {
        &self.activities
    }

    #[must_use]
    pub fn food(&self) -> &food::State {
        &self.food
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        self.session.translate("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            locale: &self.session.locale,
            screen: self.screen,
            identity: self.identity.as_ref(),
            onboarding: &self.onboarding,
            activities: &self.activities,
            food: &self.food,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests;
