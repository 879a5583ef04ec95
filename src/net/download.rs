// SPDX-License-Identifier: MPL-2.0
//! Streams a gallery image into the download directory.

use super::client::HttpClient;
use crate::app::paths;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Downloads `url` into `dir` under a sanitized, non-colliding `filename`.
///
/// Returns the path written. A partially written file is removed on failure.
pub async fn download_to_dir(
    client: HttpClient,
    url: String,
    filename: String,
    dir: PathBuf,
) -> Result<PathBuf> {
    let response = client.get(&url).await?;

    tokio::fs::create_dir_all(&dir).await?;
    let (mut file, path) = create_unique(&dir, &paths::sanitize_filename(&filename)).await?;

    match write_body(&mut file, response).await {
        Ok(written) => {
            tracing::debug!(path = %path.display(), bytes = written, "Download written");
            Ok(path)
        }
        Err(err) => {
            drop(file);
            discard_partial(&path).await;
            Err(err)
        }
    }
}

/// Claims the first free candidate name in `dir` by creating it exclusively,
/// so concurrent downloads of the same name never share a file.
async fn create_unique(dir: &Path, filename: &str) -> Result<(File, PathBuf)> {
    for candidate in paths::candidate_file_names(filename) {
        let path = dir.join(candidate);
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => return Ok((file, path)),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Err(Error::Io(format!(
        "no free file name for {filename:?} in {}",
        dir.display()
    )))
}

async fn write_body(file: &mut File, response: reqwest::Response) -> Result<u64> {
    use futures_util::StreamExt;

    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}

async fn discard_partial(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        tracing::debug!(path = %path.display(), error = %err, "Could not remove partial download");
    }
}
