// SPDX-License-Identifier: MPL-2.0
//! Update loop: routing, screen events and backend results.

use super::effect::mutation_keys;
use super::{App, Message, Outcome, Route, Screen, Ticket};
use crate::application::command::{add_comment, create_post, join_activity, register};
use crate::application::port::RemoteCollection;
use crate::application::query::{fetch_activities, fetch_food_posts};
use crate::domain::{PostKind, UserIdentity};
use crate::error::{Error, Result};
use crate::ui::listing::Submission;
use crate::ui::notifications::Notification;
use crate::ui::{activities, food, hub, onboarding};
use iced::Task;
use std::future::Future;
use std::sync::Arc;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Onboarding(message) => self.handle_onboarding(message),
            Message::Hub(message) => self.handle_hub(message),
            Message::Activities(message) => self.handle_activities(message),
            Message::Food(message) => self.handle_food(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Remote(ticket, outcome) => self.handle_outcome(ticket, outcome),
        }
    }

    /// Switches screens. Every call starts a new visit, so results still in
    /// flight for the previous one are ignored when they arrive.
    pub(super) fn navigate(&mut self, route: Route) -> Task<Message> {
        let (screen, form_open) = route.resolve(self.session.identity.has_session());
        self.visit += 1;
        self.screen = screen;
        tracing::debug!(%route, ?screen, visit = self.visit, "navigating");

        match screen {
            Screen::Onboarding => {
                self.onboarding = onboarding::State::default();
                Task::none()
            }
            Screen::Hub => Task::none(),
            Screen::Activities => {
                self.activities = activities::State::new(form_open);
                self.load()
            }
            Screen::Food => {
                self.food = food::State::default();
                self.load()
            }
        }
    }

    /// Issues the read for the current screen.
    fn load(&mut self) -> Task<Message> {
        let ticket = self.ticket();
        match self.screen {
            Screen::Activities => {
                self.activities.begin_load();
                self.call(
                    ticket,
                    |remote| async move { fetch_activities(remote.as_ref()).await },
                    Outcome::Activities,
                )
            }
            Screen::Food => {
                self.food.begin_load();
                self.call(
                    ticket,
                    |remote| async move { fetch_food_posts(remote.as_ref()).await },
                    Outcome::Food,
                )
            }
            Screen::Onboarding | Screen::Hub => Task::none(),
        }
    }

    /// Runs `job` against the backend and tags its result with `ticket`.
    fn call<T, F, Fut>(
        &self,
        ticket: Ticket,
        job: F,
        wrap: impl Fn(Result<T>) -> Outcome + Send + 'static,
    ) -> Task<Message>
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn RemoteCollection>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let remote = self.remote.clone();
        Task::perform(
            async move {
                match remote {
                    Some(remote) => job(remote).await,
                    None => Err(Error::Remote("backend is not configured".to_string())),
                }
            },
            move |result| Message::Remote(ticket, wrap(result)),
        )
    }

    /// Identity check that precedes every mutation. Without a cached
    /// identity the error carries the redirect to onboarding.
    fn identity_or_redirect(&mut self) -> std::result::Result<UserIdentity, Task<Message>> {
        match self.session.identity.require() {
            Ok(identity) => Ok(identity),
            Err(err) => {
                tracing::warn!(%err, screen = ?self.screen, "mutation aborted");
                self.notifications.push(Notification::warning(err.i18n_key()));
                Err(self.navigate(Route::UserInfo))
            }
        }
    }

    /// A submit reached a listing that is not `Loaded` (the read failed or
    /// never ran), so there is nothing to submit against.
    fn listing_not_ready(&mut self) -> Task<Message> {
        tracing::debug!(screen = ?self.screen, "listing not ready for a mutation");
        self.notifications
            .push(Notification::warning("notification-list-not-ready"));
        Task::none()
    }

    fn toggle_language(&mut self) -> Task<Message> {
        let locale = self.session.locale.toggle();
        tracing::info!(locale = locale.code(), "language switched");
        Task::none()
    }

    fn handle_onboarding(&mut self, message: onboarding::Message) -> Task<Message> {
        match self.onboarding.update(message) {
            onboarding::Event::None => Task::none(),
            onboarding::Event::ToggleLanguage => self.toggle_language(),
            onboarding::Event::Submit(form) => {
                if self.onboarding.is_submitting() {
                    return Task::none();
                }
                if let Err(field) = form.validate() {
                    self.notifications.push(Notification::warning(field.i18n_key()));
                    return Task::none();
                }
                self.onboarding.set_submitting(true);
                let identities = self.session.identity.clone();
                self.call(
                    self.ticket(),
                    move |remote| async move {
                        register(remote.as_ref(), &identities, &form).await
                    },
                    Outcome::Registered,
                )
            }
        }
    }

    fn handle_hub(&mut self, message: hub::Message) -> Task<Message> {
        match hub::update(message) {
            hub::Event::OpenFood => self.navigate(Route::Food),
            hub::Event::OpenActivities => self.navigate(Route::Activities),
            hub::Event::ToggleLanguage => self.toggle_language(),
        }
    }

    fn handle_activities(&mut self, message: activities::Message) -> Task<Message> {
        match self.activities.update(message) {
            activities::Event::None => Task::none(),
            activities::Event::Load => self.load(),
            activities::Event::Back => self.navigate(Route::Main),
            activities::Event::ToggleLanguage => self.toggle_language(),
            activities::Event::Create(draft) => {
                let user = match self.identity_or_redirect() {
                    Ok(user) => user,
                    Err(task) => return task,
                };
                if let Err(field) = draft.validate() {
                    self.notifications.push(Notification::warning(field.i18n_key()));
                    return Task::none();
                }
                if !self.activities.begin_submit(Submission::Create) {
                    return self.listing_not_ready();
                }
                self.mutate(Submission::Create, move |remote| async move {
                    create_post(remote.as_ref(), &user, PostKind::Activity, &draft).await
                })
            }
            activities::Event::Join(post) => {
                let user = match self.identity_or_redirect() {
                    Ok(user) => user,
                    Err(task) => return task,
                };
                if !self.activities.begin_submit(Submission::Join) {
                    return self.listing_not_ready();
                }
                self.mutate(Submission::Join, move |remote| async move {
                    join_activity(remote.as_ref(), &user, &post).await
                })
            }
        }
    }

    fn handle_food(&mut self, message: food::Message) -> Task<Message> {
        match self.food.update(message) {
            food::Event::None => Task::none(),
            food::Event::Load => self.load(),
            food::Event::Back => self.navigate(Route::Main),
            food::Event::ToggleLanguage => self.toggle_language(),
            food::Event::Create(draft) => {
                let user = match self.identity_or_redirect() {
                    Ok(user) => user,
                    Err(task) => return task,
                };
                if let Err(field) = draft.validate() {
                    self.notifications.push(Notification::warning(field.i18n_key()));
                    return Task::none();
                }
                if !self.food.begin_submit(Submission::Create) {
                    return self.listing_not_ready();
                }
                self.mutate(Submission::Create, move |remote| async move {
                    create_post(remote.as_ref(), &user, PostKind::Food, &draft).await
                })
            }
            food::Event::Comment(post, draft) => {
                let user = match self.identity_or_redirect() {
                    Ok(user) => user,
                    Err(task) => return task,
                };
                if let Err(field) = draft.validate() {
                    self.notifications.push(Notification::warning(field.i18n_key()));
                    return Task::none();
                }
                if !self.food.begin_submit(Submission::Comment) {
                    return self.listing_not_ready();
                }
                self.mutate(Submission::Comment, move |remote| async move {
                    add_comment(remote.as_ref(), &user, &post, &draft).await
                })
            }
        }
    }

    fn mutate<F, Fut>(&self, action: Submission, job: F) -> Task<Message>
    where
        F: FnOnce(Arc<dyn RemoteCollection>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.call(self.ticket(), job, move |result| Outcome::Mutated {
            action,
            result,
        })
    }

    fn handle_outcome(&mut self, ticket: Ticket, outcome: Outcome) -> Task<Message> {
        if ticket != self.ticket() {
            tracing::debug!(?ticket, current = ?self.ticket(), "dropping stale result");
            return Task::none();
        }

        match outcome {
            Outcome::Registered(result) => {
                self.onboarding.set_submitting(false);
                match result {
                    Ok(identity) => {
                        self.identity = Some(identity);
                        self.notifications
                            .push(Notification::success("notification-profile-created"));
                        self.navigate(Route::Main)
                    }
                    Err(Error::Validation(field)) => {
                        self.notifications.push(Notification::warning(field.i18n_key()));
                        Task::none()
                    }
                    Err(err) => {
                        tracing::warn!(%err, "registration failed");
                        self.notifications
                            .push(Notification::error("notification-profile-failed"));
                        Task::none()
                    }
                }
            }
            Outcome::Activities(result) => {
                self.report_load_failure(result.as_ref().err());
                self.activities.loaded(result);
                Task::none()
            }
            Outcome::Food(result) => {
                self.report_load_failure(result.as_ref().err());
                self.food.loaded(result);
                Task::none()
            }
            Outcome::Mutated { action, result } => self.finish_mutation(action, result),
        }
    }

    fn report_load_failure(&mut self, err: Option<&Error>) {
        if let Some(err) = err {
            tracing::warn!(%err, screen = ?self.screen, "listing read failed");
            self.notifications
                .push(Notification::error("notification-load-failed"));
        }
    }

    fn finish_mutation(&mut self, action: Submission, result: Result<()>) -> Task<Message> {
        let succeeded = result.is_ok();
        let accepted = match self.screen {
            Screen::Activities => self.activities.submitted(succeeded),
            Screen::Food => self.food.submitted(succeeded),
            Screen::Onboarding | Screen::Hub => false,
        };
        if !accepted {
            return Task::none();
        }

        let (success_key, failure_key) = mutation_keys(self.screen, action);
        match result {
            Ok(()) => {
                tracing::info!(?action, screen = ?self.screen, "mutation succeeded");
                self.notifications.push(Notification::success(success_key));
                self.load()
            }
            Err(Error::Validation(field)) => {
                self.notifications.push(Notification::warning(field.i18n_key()));
                Task::none()
            }
            Err(err) => {
                tracing::warn!(%err, ?action, "mutation failed");
                self.notifications.push(Notification::error(failure_key));
                Task::none()
            }
        }
    }
}
