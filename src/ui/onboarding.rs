// SPDX-License-Identifier: MPL-2.0
//! Onboarding screen: asks for a display name and age.
//!
//! Submitting hands the form to the parent, which creates the backend
//! account. Field values are kept until onboarding succeeds so a failed
//! attempt can be retried without retyping.

use crate::domain::OnboardingForm;
use crate::i18n::LocaleContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{language_switch, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, text_input, Column, Container, Row};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub locale: &'a LocaleContext,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    AgeChanged(String),
    Submit,
    ToggleLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submit(OnboardingForm),
    ToggleLanguage,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    form: OnboardingForm,
    submitting: bool,
}

impl State {
    #[must_use]
    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.form.name = name;
                Event::None
            }
            Message::AgeChanged(age) => {
                // Digits only; anything else would fail validation anyway.
                if age.chars().all(|c| c.is_ascii_digit()) {
                    self.form.age = age;
                }
                Event::None
            }
            Message::Submit if self.submitting => Event::None,
            Message::Submit => Event::Submit(self.form.clone()),
            Message::ToggleLanguage => Event::ToggleLanguage,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'_>) -> Element<'a, Message> {
        let locale = ctx.locale;
        let align = if locale.get().is_rtl() {
            Horizontal::Right
        } else {
            Horizontal::Left
        };

        let name = text_input(&locale.translate("enter-name"), &self.form.name)
            .on_input(Message::NameChanged)
            .padding(spacing::XS);
        let age = text_input(&locale.translate("enter-age"), &self.form.age)
            .on_input(Message::AgeChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS);

        let label = if self.submitting {
            locale.translate("loading")
        } else {
            locale.translate("join")
        };
        let submit = button(text(label).size(typography::BODY))
            .on_press_maybe((!self.submitting).then_some(Message::Submit))
            .style(styles::button::primary)
            .width(Length::Fill);

        let card = Column::new()
            .spacing(spacing::MD)
            .align_x(align)
            .push(text(locale.translate("welcome")).size(typography::TITLE_LG))
            .push(name)
            .push(age)
            .push(submit);

        let header = Row::new().push(language_switch::view(locale, Message::ToggleLanguage));

        Column::new()
            .padding(spacing::MD)
            .spacing(spacing::LG)
            .push(Container::new(header).width(Length::Fill).align_x(align))
            .push(
                Container::new(
                    container(card)
                        .padding(spacing::LG)
                        .width(Length::Fixed(sizing::FORM_WIDTH))
                        .style(styles::container::card),
                )
                .width(Length::Fill)
                .center_x(Length::Fill),
            )
            .into()
    }
}
