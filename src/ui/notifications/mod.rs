// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-recipe-posted"));
//! let overlay = Toast::view_overlay(&manager, &locale).map(Message::Notification);
//! ```
//!
//! Success/info toasts last 3s, warnings 5s, errors stay until dismissed.
//! At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
