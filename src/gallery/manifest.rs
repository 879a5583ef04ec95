// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest loading.
//!
//! A manifest is the JSON list of image records the server renders into its
//! gallery page. Both a bare array and an object with an `images` array are
//! accepted; unknown fields are ignored.

use super::item::{DownloadTarget, GalleryItem, ItemId};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ImageRecord {
    #[serde(default)]
    url: String,
    #[serde(default)]
    filename: String,
    #[serde(default, alias = "timestamp")]
    created_at: Option<String>,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    quality: Option<String>,
    #[serde(default)]
    download_url: Option<String>,
    #[serde(default)]
    download_filename: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestDocument {
    List(Vec<ImageRecord>),
    Wrapped { images: Vec<ImageRecord> },
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses manifest JSON into gallery items, numbered in document order.
///
/// Records without an image URL are skipped and logged.
pub fn parse(json: &str) -> Result<Vec<GalleryItem>> {
    let document: ManifestDocument = serde_json::from_str(json)?;
    let records = match document {
        ManifestDocument::List(records) | ManifestDocument::Wrapped { images: records } => records,
    };

    let mut items = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        if record.url.trim().is_empty() {
            tracing::warn!(position, "Skipping manifest record without url");
            continue;
        }

        let filename = if record.filename.trim().is_empty() {
            record
                .url
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string()
        } else {
            record.filename
        };

        let download = DownloadTarget::new(
            non_empty(record.download_url).unwrap_or_else(|| record.url.clone()),
            non_empty(record.download_filename).unwrap_or_else(|| filename.clone()),
        );

        let mut item = GalleryItem::new(
            ItemId(items.len()),
            record.url,
            filename,
            record.created_at.unwrap_or_default(),
        )
        .with_download(download);
        item.prompt = non_empty(record.prompt);
        item.model = non_empty(record.model);
        item.size = non_empty(record.size);
        item.quality = non_empty(record.quality);
        items.push(item);
    }

    Ok(items)
}

/// Reads and parses a manifest file.
pub fn load_from_path(path: &Path) -> Result<Vec<GalleryItem>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content).map_err(|err| match err {
        Error::Manifest(message) => Error::Manifest(format!("{}: {message}", path.display())),
        other => other,
    })
}
