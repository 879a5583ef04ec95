// SPDX-License-Identifier: MPL-2.0
//! Localized strings through Fluent.
//!
//! Every user-facing string is an i18n key. Translation files are embedded
//! from `assets/i18n/` at compile time, the locale is picked from the CLI,
//! then the config, then the OS, and toast messages fill placeables such as
//! `{ $filename }` from their arguments. Missing keys render as
//! `MISSING: <key>`.

pub mod fluent;
