// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] carries an i18n key, its arguments and a severity.
//! Its lifecycle starts when the manager makes it visible; every timing
//! question is answered from that instant so that no separate timer exists
//! that could outlive the toast.

use crate::config::defaults::{
    TOAST_DISPLAY_LONG_MS, TOAST_DISPLAY_MS, TOAST_ENTER_DELAY_MS, TOAST_TRANSITION_MS,
};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration, icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "\u{2714}",
            Severity::Error => "!",
            Severity::Warning => "\u{26A0}",
            Severity::Info => "\u{2139}",
        }
    }

    /// How long the toast stays before its exit transition begins.
    #[must_use]
    pub fn display_duration(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_millis(TOAST_DISPLAY_MS),
            Severity::Warning | Severity::Error => Duration::from_millis(TOAST_DISPLAY_LONG_MS),
        }
    }
}

/// Where a visible toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the enter delay or fading in.
    Entering,
    Shown,
    /// Fading out after the display window.
    Leaving,
    /// Exit transition finished; the toast must be removed.
    Expired,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    message_args: Vec<(String, String)>,
    custom_display_duration: Option<Duration>,
    /// Set when the toast becomes visible; `None` while queued.
    shown_at: Option<Instant>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` is resolved against the i18n bundle at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            custom_display_duration: None,
            shown_at: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the severity's display window.
    #[must_use]
    pub fn display_for(mut self, duration: Duration) -> Self {
        self.custom_display_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.custom_display_duration
            .unwrap_or_else(|| self.severity.display_duration())
    }

    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    /// Starts the lifecycle clock. Later calls keep the first instant.
    pub(super) fn activate(&mut self, now: Instant) {
        if self.shown_at.is_none() {
            self.shown_at = Some(now);
        }
    }

    /// Instant at which the toast must be gone.
    #[must_use]
    pub fn removal_deadline(&self) -> Option<Instant> {
        self.shown_at
            .map(|shown| shown + self.display_duration() + transition())
    }

    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        let Some(shown) = self.shown_at else {
            return Phase::Entering;
        };
        let elapsed = now.saturating_duration_since(shown);
        let display = self.display_duration();

        if elapsed >= display + transition() {
            Phase::Expired
        } else if elapsed >= display {
            Phase::Leaving
        } else if elapsed < enter_delay() + transition() {
            Phase::Entering
        } else {
            Phase::Shown
        }
    }

    /// Opacity of the toast at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let Some(shown) = self.shown_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(shown);
        let display = self.display_duration();
        let transition = transition().as_secs_f32();

        let value = if elapsed >= display {
            1.0 - (elapsed - display).as_secs_f32() / transition
        } else if elapsed <= enter_delay() {
            0.0
        } else {
            (elapsed - enter_delay()).as_secs_f32() / transition
        };
        value.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.phase_at(now) == Phase::Expired
    }
}

fn enter_delay() -> Duration {
    Duration::from_millis(TOAST_ENTER_DELAY_MS)
}

fn transition() -> Duration {
    Duration::from_millis(TOAST_TRANSITION_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn shown(severity: Severity, at: Instant) -> Notification {
        let mut notification = Notification::new(severity, "test");
        notification.activate(at);
        notification
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn glyphs_follow_severity() {
        assert_eq!(Severity::Success.glyph(), "\u{2714}");
        assert_eq!(Severity::Error.glyph(), "!");
        assert_eq!(Severity::Warning.glyph(), "\u{26A0}");
        assert_eq!(Severity::Info.glyph(), "\u{2139}");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn warnings_and_errors_stay_longer() {
        assert_eq!(Severity::Success.display_duration(), ms(3000));
        assert_eq!(Severity::Info.display_duration(), ms(3000));
        assert_eq!(Severity::Warning.display_duration(), ms(5000));
        assert_eq!(Severity::Error.display_duration(), ms(5000));
    }

    #[test]
    fn queued_notification_is_invisible() {
        let notification = Notification::info("queued");
        let now = Instant::now();
        assert_eq!(notification.opacity_at(now), 0.0);
        assert_eq!(notification.phase_at(now), Phase::Entering);
        assert!(notification.removal_deadline().is_none());
        assert!(!notification.is_expired_at(now + ms(60_000)));
    }

    #[test]
    fn lifecycle_follows_enter_display_exit() {
        let start = Instant::now();
        let toast = shown(Severity::Success, start);

        assert_eq!(toast.opacity_at(start + ms(50)), 0.0);
        assert_eq!(toast.phase_at(start + ms(50)), Phase::Entering);

        let fading_in = toast.opacity_at(start + ms(250));
        assert!(fading_in > 0.4 && fading_in < 0.6, "got {fading_in}");

        assert_eq!(toast.phase_at(start + ms(1000)), Phase::Shown);
        assert_eq!(toast.opacity_at(start + ms(1000)), 1.0);

        assert_eq!(toast.phase_at(start + ms(2999)), Phase::Shown);
        assert_eq!(toast.phase_at(start + ms(3150)), Phase::Leaving);
        let fading_out = toast.opacity_at(start + ms(3150));
        assert!(fading_out > 0.4 && fading_out < 0.6, "got {fading_out}");

        assert!(!toast.is_expired_at(start + ms(3299)));
        assert!(toast.is_expired_at(start + ms(3300)));
        assert_eq!(toast.removal_deadline(), Some(start + ms(3300)));
    }

    #[test]
    fn activate_keeps_first_instant() {
        let start = Instant::now();
        let mut toast = shown(Severity::Info, start);
        toast.activate(start + ms(500));
        assert_eq!(toast.shown_at(), Some(start));
    }

    #[test]
    fn custom_display_window_overrides_severity() {
        let start = Instant::now();
        let mut toast = Notification::error("slow").display_for(ms(1000));
        toast.activate(start);
        assert!(toast.is_expired_at(start + ms(1300)));
    }

    #[test]
    fn builder_collects_arguments() {
        let notification = Notification::success("notification-download-started")
            .with_arg("filename", "cat.png");

        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message_key(), "notification-download-started");
        assert_eq!(
            notification.message_args(),
            &[("filename".to_string(), "cat.png".to_string())]
        );
    }
}
