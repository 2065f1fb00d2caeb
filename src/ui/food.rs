// SPDX-License-Identifier: MPL-2.0
//! Food screen: post recipes and comment on them.
//!
//! At most one comment composer is open at a time. Like the activities
//! screen, every backend call is delegated to the parent through [`Event`].

use crate::domain::{CommentDraft, FoodListing, PostDraft, PostId};
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
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    TitleChanged(String),
    DescriptionChanged(String),
    SubmitPost,
    OpenComposer(PostId),
    CommentChanged(String),
    SubmitComment,
    CancelComment,
    Back,
    ToggleLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Load,
    Create(PostDraft),
    Comment(PostId, CommentDraft),
    Back,
    ToggleLanguage,
}

/// The open comment composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    pub post: PostId,
    pub draft: CommentDraft,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    listing: Listing<FoodListing>,
    draft: PostDraft,
    composer: Option<Composer>,
}

impl State {
    #[must_use]
    pub fn listing(&self) -> &Listing<FoodListing> {
        &self.listing
    }

    #[must_use]
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    #[must_use]
    pub fn composer(&self) -> Option<&Composer> {
        self.composer.as_ref()
    }

    pub fn begin_load(&mut self) {
        self.listing.begin_load();
    }

    pub fn loaded(&mut self, result: Result<Vec<FoodListing>>) -> bool {
        self.listing.finish_load(result)
    }

    pub fn begin_submit(&mut self, action: Submission) -> bool {
        self.listing.begin_submit(action)
    }

    /// Mutation finished. On success the consumed input is cleared (the
    /// recipe form, or the composer which also closes); on failure nothing
    /// changes.
    pub fn submitted(&mut self, succeeded: bool) -> bool {
        let action = self.listing.submitting();
        if !self.listing.finish_submit(succeeded) {
            return false;
        }
        if succeeded {
            match action {
                Some(Submission::Create) => self.draft = PostDraft::default(),
                Some(Submission::Comment) => self.composer = None,
                Some(Submission::Join) | None => {}
            }
        }
        true
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Refresh if self.listing.is_busy() => Event::None,
            Message::Refresh => Event::Load,
            Message::TitleChanged(title) => {
                self.draft.title = title;
                Event::None
            }
            Message::DescriptionChanged(description) => {
                self.draft.description = description;
                Event::None
            }
            Message::OpenComposer(post) => {
                // Switching posts discards the other composer's text.
                if self.composer.as_ref().map(|c| &c.post) != Some(&post) {
                    self.composer = Some(Composer {
                        post,
                        draft: CommentDraft::default(),
                    });
                }
                Event::None
            }
            Message::CommentChanged(content) => {
                if let Some(composer) = &mut self.composer {
                    composer.draft.content = content;
                }
                Event::None
            }
            Message::CancelComment => {
                self.composer = None;
                Event::None
            }
            Message::SubmitPost | Message::SubmitComment if self.listing.is_busy() => Event::None,
            Message::SubmitPost => Event::Create(self.draft.clone()),
            Message::SubmitComment => match &self.composer {
                Some(composer) => Event::Comment(composer.post.clone(), composer.draft.clone()),
                None => Event::None,
            },
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
            .push(language_switch::view(locale, Message::ToggleLanguage));

        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(align)
            .width(Length::Fixed(sizing::CONTENT_WIDTH))
            .push(text(locale.translate("food")).size(typography::TITLE_LG))
            .push(toolbar)
            .push(self.view_form(locale, can_submit));

        if self.listing.is_failed() {
            content = content.push(text(locale.translate("load-failed")));
        } else if self.listing.is_loading() && self.listing.items().is_empty() {
            content = content.push(text(locale.translate("loading")));
        } else if self.listing.items().is_empty() {
            content = content.push(text(locale.translate("no-posts")));
        }

        for listing in self.listing.items() {
            content = content.push(self.view_post(listing, locale, can_submit));
        }

        scrollable(
            Container::new(content)
                .padding(spacing::MD)
                .center_x(Length::Fill),
        )
        .into()
    }

    fn view_form<'a>(&'a self, locale: &LocaleContext, can_submit: bool) -> Element<'a, Message> {
        let submit_label = if self.listing.submitting() == Some(Submission::Create) {
            locale.translate("loading")
        } else {
            locale.translate("post")
        };

        container(
            Column::new()
                .spacing(spacing::SM)
                .push(
                    text_input(
                        &locale.translate("recipe-title-placeholder"),
                        &self.draft.title,
                    )
                    .on_input(Message::TitleChanged)
                    .padding(spacing::XS),
                )
                .push(
                    text_input(
                        &locale.translate("recipe-description-placeholder"),
                        &self.draft.description,
                    )
                    .on_input(Message::DescriptionChanged)
                    .on_submit(Message::SubmitPost)
                    .padding(spacing::XS),
                )
                .push(
                    button(text(submit_label))
                        .on_press_maybe(can_submit.then_some(Message::SubmitPost))
                        .style(styles::button::primary),
                ),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    }

    fn view_post<'a>(
        &'a self,
        listing: &'a FoodListing,
        locale: &LocaleContext,
        can_submit: bool,
    ) -> Element<'a, Message> {
        let author = listing.author_name.as_deref().unwrap_or("?");

        let mut comments = Column::new().spacing(spacing::XXS).push(
            text(format!(
                "{} ({})",
                locale.translate("comments"),
                listing.comments.len()
            ))
            .size(typography::CAPTION),
        );
        for comment in &listing.comments {
            let who = comment.author_name.as_deref().unwrap_or("?");
            comments = comments.push(
                text(format!("{who}: {}", comment.content)).size(typography::BODY),
            );
        }

        let composer: Element<'a, Message> = match &self.composer {
            Some(composer) if composer.post == listing.post.id => Row::new()
                .spacing(spacing::XS)
                .push(
                    text_input(
                        &locale.translate("comment-placeholder"),
                        &composer.draft.content,
                    )
                    .on_input(Message::CommentChanged)
                    .on_submit(Message::SubmitComment)
                    .padding(spacing::XS)
                    .width(Length::Fill),
                )
                .push(
                    button(text(locale.translate("post")))
                        .on_press_maybe(can_submit.then_some(Message::SubmitComment))
                        .style(styles::button::primary),
                )
                .push(
                    button(text(locale.translate("cancel")))
                        .on_press(Message::CancelComment)
                        .style(styles::button::ghost),
                )
                .into(),
            _ => button(text(locale.translate("comment")))
                .on_press(Message::OpenComposer(listing.post.id.clone()))
                .style(styles::button::ghost)
                .into(),
        };

        container(
            Column::new()
                .spacing(spacing::XS)
                .push(text(&listing.post.title).size(typography::TITLE_SM))
                .push(
                    text(format!("{}: {author}", locale.translate("posted-by")))
                        .size(typography::CAPTION),
                )
                .push(text(&listing.post.description).size(typography::BODY))
                .push(comments)
                .push(composer),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    }
}
