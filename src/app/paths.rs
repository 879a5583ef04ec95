// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`GALLERY_LENS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! Downloads go to the `--download-dir` CLI argument, then the `[downloads]`
//! config directory, then the platform download directory.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GalleryLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GALLERY_LENS_CONFIG_DIR";

/// Upper bound on numbered candidates before falling back to a timestamp suffix.
const MAX_NUMBERED_CANDIDATES: u32 = 9999;

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for download directory (set once at startup).
static CLI_DOWNLOAD_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and download directories.
///
/// Should be called once at startup, before any path resolution. Later calls
/// are ignored.
pub fn init_cli_overrides(config_dir: Option<String>, download_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
    let _ = CLI_DOWNLOAD_DIR.set(download_dir.map(PathBuf::from));
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the `--download-dir` CLI override, if one was given.
pub fn get_cli_download_dir() -> Option<PathBuf> {
    CLI_DOWNLOAD_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the platform download directory, or the current directory when
/// the platform has none.
pub fn get_default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// File names to try, in order, when saving `filename` next to files that
/// may already use it.
///
/// `image.png` is followed by `image (1).png`, `image (2).png`, ... and a
/// timestamped name as the last resort. Existence is not checked here; the
/// caller claims a name by creating it exclusively.
pub fn candidate_file_names(filename: &str) -> impl Iterator<Item = String> + '_ {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let extension = path.extension().and_then(|s| s.to_str());

    let numbered = (1..=MAX_NUMBERED_CANDIDATES).map(move |counter| match extension {
        Some(ext) => format!("{stem} ({counter}).{ext}"),
        None => format!("{stem} ({counter})"),
    });
    let timestamped = std::iter::once_with(move || {
        let ts = chrono::Utc::now().timestamp_millis();
        match extension {
            Some(ext) => format!("{stem}_{ts}.{ext}"),
            None => format!("{stem}_{ts}"),
        }
    });

    std::iter::once(filename.to_string())
        .chain(numbered)
        .chain(timestamped)
}

/// Reduces a server-provided filename to a single safe path component.
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_control() || matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|') { '_' } else { c })
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "image".to_string()
    } else {
        cleaned
    }
}
