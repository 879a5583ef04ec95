// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::gallery;
use crate::ui::modal;
use crate::ui::notifications;
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages and carry the results of background work.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    /// Escape pressed while the modal is open.
    EscapePressed,
    /// Periodic tick driving toast lifecycles and card entrances.
    Tick(Instant),
    StatsFetched(Result<serde_json::Value, Error>),
    ImageFetched {
        url: String,
        result: Result<Handle, Error>,
    },
    DownloadFinished {
        filename: String,
        result: Result<PathBuf, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional server base URL, overriding `[server] url`.
    pub server: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GALLERY_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional download directory override.
    /// Takes precedence over `[downloads] directory`.
    pub download_dir: Option<String>,
    /// Gallery manifest to display.
    pub manifest_path: Option<String>,
}
