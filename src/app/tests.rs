// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::application::query::fetch_activities;
use crate::domain::{Locale, PostId, PostKind, UserId};
use crate::error::Error;
use crate::test_utils::FakeBackend;
use crate::ui::listing::Submission;
use crate::ui::{activities, food, hub, onboarding};

fn app_at(route: Route, identity: Option<&UserIdentity>) -> (App, Arc<FakeBackend>) {
    let backend = Arc::new(FakeBackend::new());
    let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::default());
    let identities = IdentityStore::new(storage);
    if let Some(identity) = identity {
        identities.save(identity).expect("seed identity");
    }
    let session = SessionContext::new(
        LocaleContext::new(Dictionary::embedded(), Locale::En),
        identities,
    );
    let remote: Arc<dyn RemoteCollection> = backend.clone();
    let (app, _task) = App::from_parts(session, Some(remote), ThemeMode::Light, route);
    (app, backend)
}

fn alice() -> UserIdentity {
    UserIdentity::new(UserId::new("u-1"), "Alice", 30)
}

fn toast_keys(app: &App) -> Vec<String> {
    app.notifications()
        .visible()
        .map(|n| n.message_key().to_string())
        .collect()
}

fn deliver(app: &mut App, outcome: Outcome) {
    let ticket = app.ticket();
    let _ = app.update(Message::Remote(ticket, outcome));
}

#[test]
fn root_opens_onboarding_without_identity() {
    let (app, _) = app_at(Route::Root, None);
    assert_eq!(app.screen(), Screen::Onboarding);
}

#[test]
fn root_opens_hub_with_identity() {
    let (app, _) = app_at(Route::Root, Some(&alice()));
    assert_eq!(app.screen(), Screen::Hub);
}

#[test]
fn new_activity_route_opens_form_and_loads() {
    let (app, _) = app_at(Route::NewActivity, Some(&alice()));
    assert_eq!(app.screen(), Screen::Activities);
    assert!(app.activities().is_form_open());
    assert!(app.activities().listing().is_loading());
}

#[test]
fn hub_cards_navigate() {
    let (mut app, _) = app_at(Route::Main, Some(&alice()));
    let _ = app.update(Message::Hub(hub::Message::OpenFood));
    assert_eq!(app.screen(), Screen::Food);
    assert!(app.food().listing().is_loading());

    let _ = app.update(Message::Food(food::Message::Back));
    assert_eq!(app.screen(), Screen::Hub);
}

#[test]
fn language_toggle_switches_locale() {
    let (mut app, _) = app_at(Route::Main, None);
    let _ = app.update(Message::Hub(hub::Message::ToggleLanguage));
    assert_eq!(app.session().locale.get(), Locale::Ar);
    let _ = app.update(Message::Hub(hub::Message::ToggleLanguage));
    assert_eq!(app.session().locale.get(), Locale::En);
}

#[test]
fn join_with_identity_starts_submitting() {
    let (mut app, _) = app_at(Route::Activities, Some(&alice()));
    deliver(&mut app, Outcome::Activities(Ok(Vec::new())));

    let _ = app.update(Message::Activities(activities::Message::Join(PostId::new(
        "p-1",
    ))));

    assert_eq!(app.screen(), Screen::Activities);
    assert_eq!(
        app.activities().listing().submitting(),
        Some(Submission::Join)
    );
}

#[test]
fn join_without_identity_redirects_to_onboarding() {
    let (mut app, _) = app_at(Route::Activities, None);
    deliver(&mut app, Outcome::Activities(Ok(Vec::new())));

    let _ = app.update(Message::Activities(activities::Message::Join(PostId::new(
        "p-1",
    ))));

    assert_eq!(app.screen(), Screen::Onboarding);
    assert_eq!(toast_keys(&app), ["notification-login-required"]);
    // The gate runs before the listing enters `Submitting`.
    assert_eq!(app.activities().listing().submitting(), None);
}

#[test]
fn comment_without_identity_redirects_to_onboarding() {
    let (mut app, _) = app_at(Route::Food, None);
    deliver(&mut app, Outcome::Food(Ok(Vec::new())));

    let _ = app.update(Message::Food(food::Message::OpenComposer(PostId::new(
        "p-1",
    ))));
    let _ = app.update(Message::Food(food::Message::CommentChanged(
        "Looks tasty".into(),
    )));
    let _ = app.update(Message::Food(food::Message::SubmitComment));

    assert_eq!(app.screen(), Screen::Onboarding);
    assert_eq!(toast_keys(&app), ["notification-login-required"]);
    assert_eq!(app.food().listing().submitting(), None);
    assert!(app.food().listing().can_submit());
}

#[test]
fn submit_after_failed_read_asks_for_reload() {
    let (mut app, _) = app_at(Route::NewActivity, Some(&alice()));
    deliver(
        &mut app,
        Outcome::Activities(Err(Error::Remote("offline".into()))),
    );
    let _ = app.update(Message::Activities(activities::Message::TitleChanged(
        "Picnic".into(),
    )));
    let _ = app.update(Message::Activities(
        activities::Message::DescriptionChanged("Sunday picnic".into()),
    ));
    let _ = app.update(Message::Activities(activities::Message::SubmitCreate));

    assert!(app.activities().listing().is_failed());
    assert_eq!(app.activities().listing().submitting(), None);
    assert_eq!(
        toast_keys(&app),
        ["notification-load-failed", "notification-list-not-ready"]
    );
    assert_eq!(app.activities().draft().title, "Picnic");
}

#[test]
fn create_without_identity_redirects_to_onboarding() {
    let (mut app, _) = app_at(Route::Activities, None);
    deliver(&mut app, Outcome::Activities(Ok(Vec::new())));
    let _ = app.update(Message::Activities(activities::Message::TitleChanged(
        "Picnic".into(),
    )));
    let _ = app.update(Message::Activities(activities::Message::SubmitCreate));
    assert_eq!(app.screen(), Screen::Onboarding);
    assert_eq!(app.activities().listing().submitting(), None);
}

#[tokio::test]
async fn stale_listing_result_is_dropped() {
    let (mut app, backend) = app_at(Route::Activities, Some(&alice()));
    backend.seed_profile("u-1", "Alice", 30);
    backend.seed_post("u-1", PostKind::Activity, "Picnic", "Sunday picnic");
    let rows = fetch_activities(backend.as_ref()).await.expect("fetch");

    let first_visit = app.ticket();
    let _ = app.update(Message::Activities(activities::Message::Back));
    let _ = app.update(Message::Hub(hub::Message::OpenActivities));
    assert_ne!(app.ticket(), first_visit);

    let _ = app.update(Message::Remote(first_visit, Outcome::Activities(Ok(rows.clone()))));
    assert!(app.activities().listing().is_loading());

    deliver(&mut app, Outcome::Activities(Ok(rows)));
    assert_eq!(app.activities().listing().items().len(), 1);
}

#[test]
fn failed_read_marks_listing_failed() {
    let (mut app, _) = app_at(Route::Activities, Some(&alice()));
    deliver(
        &mut app,
        Outcome::Activities(Err(Error::Remote("offline".into()))),
    );
    assert!(app.activities().listing().is_failed());
    assert_eq!(toast_keys(&app), ["notification-load-failed"]);
}

#[test]
fn invalid_onboarding_form_is_not_submitted() {
    let (mut app, _) = app_at(Route::UserInfo, None);
    let _ = app.update(Message::Onboarding(onboarding::Message::NameChanged(
        "Alice".into(),
    )));
    let _ = app.update(Message::Onboarding(onboarding::Message::AgeChanged(
        "0".into(),
    )));
    let _ = app.update(Message::Onboarding(onboarding::Message::Submit));

    assert!(!app.onboarding().is_submitting());
    assert_eq!(toast_keys(&app), ["validation-age"]);
}

#[test]
fn registration_success_opens_hub() {
    let (mut app, _) = app_at(Route::UserInfo, None);
    let _ = app.update(Message::Onboarding(onboarding::Message::NameChanged(
        "Alice".into(),
    )));
    let _ = app.update(Message::Onboarding(onboarding::Message::AgeChanged(
        "30".into(),
    )));
    let _ = app.update(Message::Onboarding(onboarding::Message::Submit));
    assert!(app.onboarding().is_submitting());

    deliver(&mut app, Outcome::Registered(Ok(alice())));

    assert_eq!(app.screen(), Screen::Hub);
    assert_eq!(toast_keys(&app), ["notification-profile-created"]);
}

#[test]
fn rejected_insert_keeps_form_input() {
    let (mut app, _) = app_at(Route::NewActivity, Some(&alice()));
    deliver(&mut app, Outcome::Activities(Ok(Vec::new())));
    let _ = app.update(Message::Activities(activities::Message::TitleChanged(
        "Picnic".into(),
    )));
    let _ = app.update(Message::Activities(
        activities::Message::DescriptionChanged("Sunday picnic".into()),
    ));
    let _ = app.update(Message::Activities(activities::Message::SubmitCreate));
    assert_eq!(
        app.activities().listing().submitting(),
        Some(Submission::Create)
    );

    deliver(
        &mut app,
        Outcome::Mutated {
            action: Submission::Create,
            result: Err(Error::Remote("403".into())),
        },
    );

    assert_eq!(toast_keys(&app), ["notification-post-failed"]);
    assert_eq!(app.activities().draft().title, "Picnic");
    assert_eq!(app.activities().draft().description, "Sunday picnic");
    assert!(app.activities().is_form_open());
    assert!(!app.activities().listing().is_busy());
}

#[test]
fn successful_insert_refetches_and_clears_form() {
    let (mut app, _) = app_at(Route::NewActivity, Some(&alice()));
    deliver(&mut app, Outcome::Activities(Ok(Vec::new())));
    let _ = app.update(Message::Activities(activities::Message::TitleChanged(
        "Picnic".into(),
    )));
    let _ = app.update(Message::Activities(
        activities::Message::DescriptionChanged("Sunday picnic".into()),
    ));
    let _ = app.update(Message::Activities(activities::Message::SubmitCreate));

    deliver(
        &mut app,
        Outcome::Mutated {
            action: Submission::Create,
            result: Ok(()),
        },
    );

    assert_eq!(toast_keys(&app), ["notification-activity-created"]);
    assert!(app.activities().listing().is_loading());
    assert!(app.activities().draft().title.is_empty());
    assert!(!app.activities().is_form_open());
}

#[test]
fn title_follows_locale() {
    let (mut app, _) = app_at(Route::Main, None);
    let english = app.title();
    let _ = app.update(Message::Hub(hub::Message::ToggleLanguage));
    assert_ne!(app.title(), english);
    assert!(!app.title().is_empty());
}
