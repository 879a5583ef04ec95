// SPDX-License-Identifier: MPL-2.0
//! Gallery item data model.

use chrono::{DateTime, NaiveDateTime};

/// Position of an item in the gallery, stable for the lifetime of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a download control fetches from and which name it saves under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadTarget {
    pub url: String,
    pub filename: String,
}

impl DownloadTarget {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
        }
    }
}

/// One stored image and its metadata, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub image_url: String,
    pub filename: String,
    /// Creation time as sent by the server (`%Y-%m-%d %H:%M:%S`).
    pub timestamp: String,
    pub prompt: Option<String>,
    pub model: Option<String>,
    pub size: Option<String>,
    pub quality: Option<String>,
    /// Target of the item's nested download control.
    pub download: DownloadTarget,
}

impl GalleryItem {
    /// Creates an item whose download control fetches the displayed image.
    pub fn new(
        id: ItemId,
        image_url: impl Into<String>,
        filename: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        let image_url = image_url.into();
        let filename = filename.into();
        Self {
            id,
            download: DownloadTarget::new(image_url.clone(), filename.clone()),
            image_url,
            filename,
            timestamp: timestamp.into(),
            prompt: None,
            model: None,
            size: None,
            quality: None,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    #[must_use]
    pub fn with_download(mut self, download: DownloadTarget) -> Self {
        self.download = download;
        self
    }

    /// Human readable creation time, or the raw value when it cannot be parsed.
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

/// Formats a server timestamp as `YYYY-MM-DD HH:MM`.
///
/// Accepts the server's `%Y-%m-%d %H:%M:%S` form, ISO 8601 without offset,
/// and RFC 3339. Anything else is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    let trimmed = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return naive.format(DISPLAY).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.naive_local().format(DISPLAY).to_string();
    }
    raw.to_string()
}
