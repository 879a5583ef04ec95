// SPDX-License-Identifier: MPL-2.0
//! Network access to the image server.
//!
//! - [`client`] - shared `reqwest` client and URL resolution
//! - [`stats`] - the startup stats fetch, logged only
//! - [`download`] - streaming downloads to disk
//! - [`images`] - image bytes for display

pub mod client;
pub mod download;
pub mod images;
pub mod stats;

pub use client::HttpClient;
