// SPDX-License-Identifier: MPL-2.0
//! Fetches gallery images for display.

use super::client::HttpClient;
use crate::error::{Error, Result};
use iced::widget::image::Handle;

/// Fetches `url` and wraps the encoded bytes in an image handle.
///
/// Decoding happens in the renderer; an empty body is rejected here.
pub async fn fetch_image(client: HttpClient, url: String) -> Result<Handle> {
    let bytes = client.get_bytes(&url).await?;
    if bytes.is_empty() {
        return Err(Error::Http(format!("{url}: empty image body")));
    }
    Ok(Handle::from_bytes(bytes))
}
