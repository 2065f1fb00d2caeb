// SPDX-License-Identifier: MPL-2.0
//! Subscriptions of the root application.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// How often toast timers are checked.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Ticks only while notifications are showing or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}
