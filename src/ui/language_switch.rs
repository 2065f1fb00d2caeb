// SPDX-License-Identifier: MPL-2.0
//! Button that toggles between English and Arabic.
//!
//! The label is the *other* language's own name ("العربية" while English is
//! active, "English" while Arabic is), so it is always readable by the
//! person who wants to switch.

use crate::i18n::LocaleContext;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{button, text};
use iced::Element;

/// Renders the switch; pressing it emits `on_toggle`.
pub fn view<'a, M: Clone + 'a>(locale: &LocaleContext, on_toggle: M) -> Element<'a, M> {
    button(text(locale.translate("language-switch")).size(typography::BODY))
        .on_press(on_toggle)
        .style(styles::button::ghost)
        .into()
}
