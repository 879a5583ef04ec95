// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, renders from it, and turns its messages into an
//! `Effect` the application acts on.
//!
//! # Components
//!
//! - [`gallery`] - Animated image grid with hover feedback and download controls
//! - [`modal`] - Full-size image viewer layered over the gallery
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`image_cache`] - Decoded image handles shared by the grid and the modal
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod image_cache;
pub mod modal;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
