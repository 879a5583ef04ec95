// SPDX-License-Identifier: MPL-2.0
//! Message handlers and side effects for the application.
//!
//! Handlers take the pieces of state they touch instead of the whole `App`,
//! so each effect can be exercised on its own.

use super::Message;
use crate::error::Error;
use crate::gallery::DownloadTarget;
use crate::net::{download, images, HttpClient};
use crate::ui::image_cache::ImageCache;
use crate::ui::notifications::{Manager, Notification};
use iced::widget::image::Handle;
use iced::Task;
use std::path::PathBuf;

/// Starts a download of `target` into `dir`.
///
/// Exactly one success toast announces the download as soon as it starts.
/// The outcome of the transfer is only logged.
pub(super) fn begin_download(
    notifications: &mut Manager,
    client: Option<&HttpClient>,
    target: DownloadTarget,
    dir: PathBuf,
) -> Task<Message> {
    notifications.push(
        Notification::success("notification-download-started")
            .with_arg("filename", target.filename.clone()),
    );

    let Some(client) = client else {
        tracing::error!(url = %target.url, "Download skipped, no HTTP client available");
        return Task::none();
    };

    tracing::info!(url = %target.url, filename = %target.filename, "Download started");
    let DownloadTarget { url, filename } = target;
    Task::perform(
        download::download_to_dir(client.clone(), url, filename.clone(), dir),
        move |result| Message::DownloadFinished { filename, result },
    )
}

pub(super) fn handle_download_finished(filename: &str, result: Result<PathBuf, Error>) {
    match result {
        Ok(path) => tracing::info!(filename, path = %path.display(), "Download finished"),
        Err(err) => tracing::error!(filename, error = %err, "Download failed"),
    }
}

/// Fetches `url` for display unless it is already cached or in flight.
pub(super) fn request_image(
    cache: &mut ImageCache,
    client: Option<&HttpClient>,
    url: &str,
) -> Task<Message> {
    if !cache.begin(url) {
        return Task::none();
    }
    let Some(client) = client else {
        cache.finish(url, None);
        return Task::none();
    };

    let owned = url.to_string();
    Task::perform(
        images::fetch_image(client.clone(), owned.clone()),
        move |result| Message::ImageFetched { url: owned, result },
    )
}

/// Requests the images of the grid's visible items.
///
/// Cached entries are refreshed so they outlive the next insertions, and one
/// cache slot is always left for the modal image. Items beyond that budget
/// keep their placeholder until they are in view again.
pub(super) fn request_images<'a>(
    cache: &mut ImageCache,
    client: Option<&HttpClient>,
    urls: impl IntoIterator<Item = &'a str>,
) -> Task<Message> {
    let budget = cache.capacity().saturating_sub(1).max(1);
    let tasks: Vec<Task<Message>> = urls
        .into_iter()
        .take(budget)
        .map(|url| request_image(cache, client, url))
        .collect();
    Task::batch(tasks)
}

pub(super) fn handle_image_fetched(cache: &mut ImageCache, url: &str, result: Result<Handle, Error>) {
    match result {
        Ok(handle) => cache.finish(url, Some(handle)),
        Err(err) => {
            tracing::warn!(url, error = %err, "Image could not be loaded");
            cache.finish(url, None);
        }
    }
}
