// SPDX-License-Identifier: MPL-2.0
//! Entrance and hover motion for gallery cards.
//!
//! Pure functions of time so the view can be rebuilt on every tick.

use crate::config::defaults::{
    ENTRANCE_DURATION_MS, ENTRANCE_SLIDE_PX, HOVER_LIFT_PX, HOVER_SCALE, STAGGER_STEP_MS,
};
use std::time::{Duration, Instant};

/// Fade/slide-in state of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub opacity: f32,
    /// Downward offset in logical pixels, shrinking to zero.
    pub offset_y: f32,
}

impl Entrance {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_y: ENTRANCE_SLIDE_PX,
    };

    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

/// When card `index` starts entering.
#[must_use]
pub fn entrance_delay(index: usize) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    Duration::from_millis(STAGGER_STEP_MS).saturating_mul(index)
}

/// Entrance of card `index` at `now` for an animation started at `start`.
#[must_use]
pub fn entrance_at(index: usize, start: Instant, now: Instant) -> Entrance {
    let begins = start + entrance_delay(index);
    if now <= begins {
        return Entrance::HIDDEN;
    }

    let duration = Duration::from_millis(ENTRANCE_DURATION_MS).as_secs_f32();
    let t = ((now - begins).as_secs_f32() / duration).min(1.0);
    let eased = ease_out(t);

    Entrance {
        opacity: eased,
        offset_y: ENTRANCE_SLIDE_PX * (1.0 - eased),
    }
}

/// Instant at which the last of `count` cards has settled.
#[must_use]
pub fn entrance_end(count: usize, start: Instant) -> Instant {
    start + entrance_delay(count.saturating_sub(1)) + Duration::from_millis(ENTRANCE_DURATION_MS)
}

/// Cubic ease-out on `0.0..=1.0`.
fn ease_out(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

/// Hover transform of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub scale: f32,
    /// Upward displacement in logical pixels.
    pub lift: f32,
}

impl CardTransform {
    pub const REST: Self = Self {
        scale: 1.0,
        lift: 0.0,
    };

    pub const HOVERED: Self = Self {
        scale: HOVER_SCALE,
        lift: HOVER_LIFT_PX,
    };

    #[must_use]
    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            Self::HOVERED
        } else {
            Self::REST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn delays_follow_the_index() {
        assert_eq!(entrance_delay(0), ms(0));
        assert_eq!(entrance_delay(1), ms(100));
        assert_eq!(entrance_delay(7), ms(700));
    }

    #[test]
    fn card_is_hidden_until_its_slot() {
        let start = Instant::now();
        assert_eq!(entrance_at(3, start, start + ms(300)), Entrance::HIDDEN);
        let moving = entrance_at(3, start, start + ms(400));
        assert!(moving.opacity > 0.0 && moving.opacity < 1.0);
        assert!(moving.offset_y > 0.0 && moving.offset_y < ENTRANCE_SLIDE_PX);
    }

    #[test]
    fn card_settles_after_duration() {
        let start = Instant::now();
        assert_eq!(entrance_at(0, start, start + ms(500)), Entrance::SETTLED);
        assert_eq!(entrance_at(2, start, start + ms(700)), Entrance::SETTLED);
        assert_eq!(entrance_at(2, start, start + ms(10_000)), Entrance::SETTLED);
    }

    #[test]
    fn earlier_cards_lead_later_ones() {
        let start = Instant::now();
        let now = start + ms(250);
        let first = entrance_at(0, start, now);
        let second = entrance_at(1, start, now);
        assert!(first.opacity > second.opacity);
        assert!(first.offset_y < second.offset_y);
    }

    #[test]
    fn entrance_end_covers_last_card() {
        let start = Instant::now();
        assert_eq!(entrance_end(0, start), start + ms(500));
        assert_eq!(entrance_end(1, start), start + ms(500));
        assert_eq!(entrance_end(4, start), start + ms(800));
    }

    #[test]
    fn hover_transform_scales_and_lifts() {
        assert_eq!(CardTransform::for_hover(true).scale, 1.05);
        assert_eq!(CardTransform::for_hover(true).lift, 5.0);
        assert_eq!(CardTransform::for_hover(false), CardTransform::REST);
    }
}
