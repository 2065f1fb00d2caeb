// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::domain::UserIdentity;
use crate::i18n::LocaleContext;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{activities, food, hub, onboarding};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub locale: &'a LocaleContext,
    pub screen: Screen,
    pub identity: Option<&'a UserIdentity>,
    pub onboarding: &'a onboarding::State,
    pub activities: &'a activities::State,
    pub food: &'a food::State,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let locale = ctx.locale;
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Onboarding => ctx
            .onboarding
            .view(onboarding::ViewContext { locale })
            .map(Message::Onboarding),
        Screen::Hub => hub::view(hub::ViewContext {
            locale,
            user_name: ctx.identity.map(|identity| identity.name.as_str()),
        })
        .map(Message::Hub),
        Screen::Activities => ctx
            .activities
            .view(activities::ViewContext {
                locale,
                me: ctx.identity.map(|identity| &identity.id),
            })
            .map(Message::Activities),
        Screen::Food => ctx
            .food
            .view(food::ViewContext { locale })
            .map(Message::Food),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);
    let toasts = Toast::view_overlay(ctx.notifications, locale).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
