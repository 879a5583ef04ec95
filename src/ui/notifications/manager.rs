// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the toast stack: it limits the number of visible toasts,
//! queues the rest, and removes toasts whose exit transition has finished.
//! All time-dependent operations have an `_at` variant taking the current
//! instant so the lifecycle can be driven deterministically.

use super::notification::{Notification, NotificationId};
use crate::config::defaults::{MAX_QUEUED_TOASTS, MAX_VISIBLE_TOASTS};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Periodic tick advancing the lifecycles.
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications, oldest first.
    visible: VecDeque<Notification>,
    /// Notifications waiting for a visible slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification, starting its lifecycle now if a slot is free.
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    /// Pushes a notification as of `now`.
    ///
    /// When `MAX_VISIBLE_TOASTS` are already showing, the notification waits
    /// in the queue; a full queue drops its oldest entry.
    pub fn push_at(&mut self, mut notification: Notification, now: Instant) {
        tracing::debug!(
            key = notification.message_key(),
            severity = ?notification.severity(),
            "Notification pushed"
        );

        if self.visible.len() < MAX_VISIBLE_TOASTS {
            notification.activate(now);
            self.visible.push_back(notification);
            return;
        }

        if self.queue.len() >= MAX_QUEUED_TOASTS {
            if let Some(evicted) = self.queue.pop_front() {
                tracing::debug!(key = evicted.message_key(), "Notification queue full, dropping oldest");
            }
        }
        self.queue.push_back(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes every toast whose lifecycle has ended and fills freed slots.
    pub fn tick_at(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired_at(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick_at(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.visible.iter().chain(self.queue.iter()).any(|n| n.id() == id)
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops every notification, visible or queued.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.activate(now);
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn toast_is_present_before_display_window_and_gone_after_exit() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let toast = Notification::success("notification-download-started");
        let id = toast.id();
        manager.push_at(toast, start);

        manager.tick_at(start + ms(2999));
        assert!(manager.contains(id));

        manager.tick_at(start + ms(3200));
        assert!(manager.contains(id), "still fading out");

        manager.tick_at(start + ms(3300));
        assert!(!manager.contains(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn toasts_pushed_together_are_removed_independently() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let ids: Vec<_> = (0..3u64)
            .map(|i| {
                let toast = Notification::success(format!("toast-{i}"));
                let id = toast.id();
                manager.push_at(toast, start + ms(i * 10));
                id
            })
            .collect();

        assert_eq!(manager.visible_count(), 3);

        manager.tick_at(start + ms(3305));
        assert!(!manager.contains(ids[0]));
        assert!(manager.contains(ids[1]));
        assert!(manager.contains(ids[2]));

        manager.tick_at(start + ms(3315));
        assert!(!manager.contains(ids[1]));
        assert!(manager.contains(ids[2]));

        manager.tick_at(start + ms(3325));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let start = Instant::now();
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE_TOASTS {
            manager.push_at(Notification::success(format!("test-{i}")), start);
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE_TOASTS);

        let queued = Notification::success("queued");
        manager.push_at(queued, start);
        assert_eq!(manager.visible_count(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.queued_count(), 1);
        assert!(manager.visible().all(|n| n.shown_at().is_some()));
    }

    #[test]
    fn queued_toast_starts_its_lifecycle_when_promoted() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_TOASTS {
            manager.push_at(Notification::success(format!("visible-{i}")), start);
        }
        let queued = Notification::success("queued");
        let queued_id = queued.id();
        manager.push_at(queued, start);

        let promoted_at = start + ms(3300);
        manager.tick_at(promoted_at);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);

        let promoted = manager
            .visible()
            .find(|n| n.id() == queued_id)
            .expect("queued toast should be visible");
        assert_eq!(promoted.shown_at(), Some(promoted_at));

        manager.tick_at(promoted_at + ms(2999));
        assert!(manager.contains(queued_id));
        manager.tick_at(promoted_at + ms(3300));
        assert!(!manager.contains(queued_id));
    }

    #[test]
    fn full_queue_drops_oldest() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_TOASTS {
            manager.push_at(Notification::info(format!("visible-{i}")), start);
        }

        let first_queued = Notification::info("first-queued");
        let first_queued_id = first_queued.id();
        manager.push_at(first_queued, start);
        for i in 1..=MAX_QUEUED_TOASTS {
            manager.push_at(Notification::info(format!("queued-{i}")), start);
        }

        assert_eq!(manager.queued_count(), MAX_QUEUED_TOASTS);
        assert!(!manager.contains(first_queued_id));
    }

    #[test]
    fn dismiss_removes_immediately_and_later_ticks_ignore_it() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let toast = Notification::success("test");
        let id = toast.id();
        manager.push_at(toast, start);

        assert!(manager.dismiss_at(id, start + ms(10)));
        assert!(!manager.contains(id));

        manager.tick_at(start + ms(3300));
        assert!(!manager.dismiss_at(id, start + ms(3400)));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let start = Instant::now();
        let mut manager = Manager::new();

        let mut first_id = None;
        for i in 0..MAX_VISIBLE_TOASTS {
            let n = Notification::success(format!("visible-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push_at(n, start);
        }
        manager.push_at(Notification::success("queued"), start);

        manager.dismiss_at(first_id.expect("first id"), start + ms(5));

        assert_eq!(manager.visible_count(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn handle_message_dispatches() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let toast = Notification::warning("test");
        let id = toast.id();
        manager.push_at(toast, start);

        manager.handle_message(&Message::Tick(start + ms(4000)));
        assert!(manager.contains(id), "warnings stay for 5 s");

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..(MAX_VISIBLE_TOASTS + 3) {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert!(!manager.has_notifications());
    }
}
