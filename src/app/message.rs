// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::effect::{Outcome, Ticket};
use crate::ui::{activities, food, hub, notifications, onboarding};

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Onboarding(onboarding::Message),
    Hub(hub::Message),
    Activities(activities::Message),
    Food(food::Message),
    Notification(notifications::NotificationMessage),
    /// A backend call finished. Dropped unless `Ticket` still matches.
    Remote(Ticket, Outcome),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Startup locale (`en`, `ar`, `ar-EG`, ...). Overrides the config.
    pub lang: Option<String>,
    /// Optional data directory override (for `storage.cbor`).
    /// Takes precedence over `MAJLIS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `MAJLIS_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Initial route, e.g. `/activities/new`.
    pub route: Option<String>,
}
