// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to confirm
//! actions (a download starting) or report recoverable problems (an
//! unreadable manifest) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its severity and lifecycle phases
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering a notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(
//!     Notification::success("notification-download-started").with_arg("filename", "fox.png"),
//! );
//!
//! // On every tick subscription message
//! manager.tick_at(now);
//!
//! // In the view
//! let overlay = Toast::view_overlay(&manager, &i18n, now).map(Message::Notification);
//! ```
//!
//! # Lifecycle
//!
//! - 100 ms enter delay, 300 ms fade-in
//! - visible for 3 s (success/info) or 5 s (warning/error)
//! - 300 ms fade-out, then removed
//! - at most 4 visible; up to 16 more wait in a queue

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Phase, Severity};
pub use toast::Toast;
