// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions exist only while they are needed; dropping one from
//! `App::subscription` is how its listener is torn down.

use super::Message;
use crate::config::defaults::ANIMATION_TICK_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Listens for Escape while the modal is open.
pub fn create_escape_subscription(modal_visible: bool) -> Subscription<Message> {
    if !modal_visible {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates a periodic tick subscription for card entrances and toast lifecycles.
pub fn create_tick_subscription(is_animating: bool, has_notifications: bool) -> Subscription<Message> {
    if is_animating || has_notifications {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
