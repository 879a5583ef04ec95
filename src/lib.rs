// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a lightweight image gallery client built with the Iced GUI framework.
//!
//! It lays generated images out in an animated grid, opens them in a modal
//! viewer, downloads them from the image server and reports what happens
//! through stacked toast notifications.

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod net;
pub mod ui;
