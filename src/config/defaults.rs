// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Image server location and endpoints
//! - **Toasts**: Notification timings and stack limits
//! - **Gallery**: Entrance animation and hover transform
//! - **Cache**: Image handle cache size

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Base URL of the image server when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Path of the user statistics resource, relative to the server base URL.
pub const STATS_ENDPOINT: &str = "/api/user/stats";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("GalleryLens/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Delay between a toast being added and it starting to fade in (ms).
pub const TOAST_ENTER_DELAY_MS: u64 = 100;

/// Duration of the fade in and fade out transitions (ms).
pub const TOAST_TRANSITION_MS: u64 = 300;

/// Display window for success and info toasts (ms).
pub const TOAST_DISPLAY_MS: u64 = 3000;

/// Display window for warning and error toasts (ms).
pub const TOAST_DISPLAY_LONG_MS: u64 = 5000;

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Maximum number of toasts waiting for a visible slot.
pub const MAX_QUEUED_TOASTS: usize = 16;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Delay added per item index before its entrance animation starts (ms).
pub const STAGGER_STEP_MS: u64 = 100;

/// Duration of one item's entrance animation (ms).
pub const ENTRANCE_DURATION_MS: u64 = 500;

/// Vertical distance an item slides while entering (px).
pub const ENTRANCE_SLIDE_PX: f32 = 20.0;

/// Scale applied to a hovered item.
pub const HOVER_SCALE: f32 = 1.05;

/// Upward offset applied to a hovered item (px).
pub const HOVER_LIFT_PX: f32 = 5.0;

/// Tick interval while something animates (ms).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded image handles kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 256;

/// Minimum image cache size.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 16;

/// Maximum image cache size.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation
    assert!(TOAST_ENTER_DELAY_MS < TOAST_DISPLAY_MS);
    assert!(TOAST_TRANSITION_MS > 0);
    assert!(TOAST_DISPLAY_LONG_MS >= TOAST_DISPLAY_MS);
    assert!(MAX_VISIBLE_TOASTS >= 3);
    assert!(MAX_QUEUED_TOASTS > 0);

    // Gallery validation
    assert!(ENTRANCE_DURATION_MS > 0);
    assert!(HOVER_SCALE >= 1.0);
    assert!(HOVER_LIFT_PX >= 0.0);
    assert!(ANIMATION_TICK_MS > 0 && ANIMATION_TICK_MS < TOAST_ENTER_DELAY_MS);

    // Cache validation
    assert!(MIN_IMAGE_CACHE_ENTRIES > 0);
    assert!(MAX_IMAGE_CACHE_ENTRIES >= MIN_IMAGE_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES >= MIN_IMAGE_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES <= MAX_IMAGE_CACHE_ENTRIES);
};
