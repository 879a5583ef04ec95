// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the images shown in the grid and where they come from.

pub mod item;
pub mod manifest;

pub use item::{DownloadTarget, GalleryItem, ItemId};
