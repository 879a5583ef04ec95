// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles.

pub mod button;
pub mod container;

pub use button::{primary as button_primary, secondary as button_secondary};
