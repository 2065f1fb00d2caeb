// SPDX-License-Identifier: MPL-2.0
//! Activities screen: list, join and create activities.
//!
//! The screen never talks to the backend. It turns user intent into
//! [`Event`]s; the parent checks the cached identity, runs the call and
//! reports back through [`State::loaded`] and [`State::submitted`].

use crate::domain::{ActivityListing, PostDraft, PostId, UserId};
use crate::error::Result;
use crate::i18n::LocaleContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::listing::{Listing, Submission};
use crate::ui::{language_switch, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, scrollable, text, text_input, Column, Container, Row};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub locale: &'a LocaleContext,
    /// The cached identity's id, used to mark activities already joined.
    pub me: Option<&'a UserId>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    ToggleForm,
    TitleChanged(String),
    DescriptionChanged(String),
    SubmitCreate,
    Join(PostId),
    Back,
    ToggleLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Load,
    Create(PostDraft),
    Join(PostId),
    Back,
    ToggleLanguage,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    listing: Listing<ActivityListing>,
    form_open: bool,
    draft: PostDraft,
}

impl State {
    /// Fresh screen; `form_open` is set when entered through `/activities/new`.
    #[must_use]
    pub fn new(form_open: bool) -> Self {
        Self {
            form_open,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn listing(&self) -> &Listing<ActivityListing> {
        &self.listing
    }

    #[must_use]
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    #[must_use]
    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Marks a read as started. Called by the parent when it issues one.
    pub fn begin_load(&mut self) {
        self.listing.begin_load();
    }

    pub fn loaded(&mut self, result: Result<Vec<ActivityListing>>) -> bool {
        self.listing.finish_load(result)
    }

    /// Marks a mutation as started; `false` if the screen is not ready.
    pub fn begin_submit(&mut self, action: Submission) -> bool {
        self.listing.begin_submit(action)
    }

    /// Mutation finished. A created activity clears and closes the form; a
    /// failure leaves every input as typed.
    pub fn submitted(&mut self, succeeded: bool) -> bool {
        let action = self.listing.submitting();
        if !self.listing.finish_submit(succeeded) {
            return false;
        }
        if succeeded && action == Some(Submission::Create) {
            self.draft = PostDraft::default();
            self.form_open = false;
        }
        true
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Refresh if self.listing.is_busy() => Event::None,
            Message::Refresh => Event::Load,
            Message::ToggleForm => {
                self.form_open = !self.form_open;
                Event::None
            }
            Message::TitleChanged(title) => {
                self.draft.title = title;
                Event::None
            }
            Message::DescriptionChanged(description) => {
                self.draft.description = description;
                Event::None
            }
            Message::SubmitCreate | Message::Join(_) if self.listing.is_busy() => Event::None,
            Message::SubmitCreate => Event::Create(self.draft.clone()),
            Message::Join(post) => Event::Join(post),
            Message::Back => Event::Back,
            Message::ToggleLanguage => Event::ToggleLanguage,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let locale = ctx.locale;
        let align = if locale.get().is_rtl() {
            Horizontal::Right
        } else {
            Horizontal::Left
        };
        let busy = self.listing.is_busy();
        let can_submit = self.listing.can_submit();

        let toolbar = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(locale.translate("back")))
                    .on_press(Message::Back)
                    .style(styles::button::ghost),
            )
            .push(
                button(text(locale.translate("refresh")))
                    .on_press_maybe((!busy).then_some(Message::Refresh))
                    .style(styles::button::ghost),
            )
            .push(
                button(text(if self.form_open {
                    locale.translate("cancel")
                } else {
                    locale.translate("create-activity")
                }))
                .on_press(Message::ToggleForm)
                .style(styles::button::primary),
            )
            .push(language_switch::view(locale, Message::ToggleLanguage));

        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(align)
            .width(Length::Fixed(sizing::CONTENT_WIDTH))
            .push(text(locale.translate("activities")).size(typography::TITLE_LG))
            .push(toolbar);

        if self.form_open {
            content = content.push(self.view_form(locale, can_submit));
        }

        if self.listing.is_failed() {
            content = content.push(text(locale.translate("load-failed")));
        } else if self.listing.is_loading() && self.listing.items().is_empty() {
            content = content.push(text(locale.translate("loading")));
        } else if self.listing.items().is_empty() {
            content = content.push(text(locale.translate("no-posts")));
        }

        for activity in self.listing.items() {
            content = content.push(view_activity(activity, &ctx, can_submit));
        }

        scrollable(
            Container::new(content)
                .padding(spacing::MD)
                .center_x(Length::Fill),
        )
        .into()
    }

    fn view_form<'a>(&'a self, locale: &LocaleContext, can_submit: bool) -> Element<'a, Message> {
        let title = text_input(
            &locale.translate("activity-title-placeholder"),
            &self.draft.title,
        )
        .on_input(Message::TitleChanged)
        .padding(spacing::XS);
        let description = text_input(
            &locale.translate("activity-description-placeholder"),
            &self.draft.description,
        )
        .on_input(Message::DescriptionChanged)
        .on_submit(Message::SubmitCreate)
        .padding(spacing::XS);

        let submit_label = if self.listing.submitting() == Some(Submission::Create) {
            locale.translate("loading")
        } else {
            locale.translate("post")
        };

        container(
            Column::new()
                .spacing(spacing::SM)
                .push(title)
                .push(description)
                .push(
                    button(text(submit_label))
                        .on_press_maybe(can_submit.then_some(Message::SubmitCreate))
                        .style(styles::button::primary),
                ),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    }
}

fn view_activity<'a>(
    activity: &'a ActivityListing,
    ctx: &ViewContext<'a>,
    can_submit: bool,
) -> Element<'a, Message> {
    let locale = ctx.locale;
    let author = activity.author_name.as_deref().unwrap_or("?");
    let joined = ctx.me.is_some_and(|me| activity.has_participant(me));

    let join = if joined {
        button(text(locale.translate("joined"))).style(styles::button::ghost)
    } else {
        button(text(locale.translate("join")))
            .on_press_maybe(can_submit.then(|| Message::Join(activity.post.id.clone())))
            .style(styles::button::primary)
    };

    let footer = Row::new()
        .spacing(spacing::MD)
        .push(
            text(format!(
                "{} {}",
                activity.participant_count(),
                locale.translate("participants")
            ))
            .size(typography::CAPTION)
            .width(Length::Fill),
        )
        .push(join);

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(text(&activity.post.title).size(typography::TITLE_SM))
            .push(
                text(format!("{}: {author}", locale.translate("posted-by")))
                    .size(typography::CAPTION),
            )
            .push(text(&activity.post.description).size(typography::BODY))
            .push(footer),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
