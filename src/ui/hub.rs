// SPDX-License-Identifier: MPL-2.0
//! Hub screen: entry cards for food and activities.

use crate::i18n::LocaleContext;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{language_switch, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub locale: &'a LocaleContext,
    pub user_name: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenFood,
    OpenActivities,
    ToggleLanguage,
}

/// The hub has no state of its own; every message maps to a parent event.
pub type Event = Message;

#[must_use]
pub fn update(message: Message) -> Event {
    message
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let locale = ctx.locale;
    let rtl = locale.get().is_rtl();
    let align = if rtl { Horizontal::Right } else { Horizontal::Left };

    let greeting = match ctx.user_name {
        Some(name) => format!("{}, {name}", locale.translate("welcome")),
        None => locale.translate("welcome"),
    };

    let food = entry_card(locale.translate("food"), Message::OpenFood);
    let activities = entry_card(locale.translate("activities"), Message::OpenActivities);
    // Cards read in the script's direction.
    let cards = if rtl {
        Row::new().push(activities).push(food)
    } else {
        Row::new().push(food).push(activities)
    };

    Column::new()
        .padding(spacing::MD)
        .spacing(spacing::LG)
        .push(
            Container::new(language_switch::view(locale, Message::ToggleLanguage))
                .width(Length::Fill)
                .align_x(align),
        )
        .push(
            Container::new(text(greeting).size(typography::TITLE_LG))
                .width(Length::Fill)
                .align_x(align),
        )
        .push(cards.spacing(spacing::LG))
        .into()
}

fn entry_card<'a>(label: String, on_press: Message) -> Element<'a, Message> {
    button(
        container(text(label).size(typography::TITLE_SM))
            .padding(spacing::XL)
            .center_x(Length::Fill)
            .style(styles::container::card),
    )
    .on_press(on_press)
    .style(styles::button::ghost)
    .width(Length::FillPortion(1))
    .into()
}
