// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client bound to the image server.

use crate::config::defaults::USER_AGENT;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Url;

/// HTTP client plus the base URL that relative paths resolve against.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Builds a client for `base_url`, forwarding `session_cookie` as the
    /// `Cookie` header of every request when present.
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie.filter(|c| !c.trim().is_empty()) {
            let mut value = HeaderValue::from_str(cookie.trim())
                .map_err(|e| Error::Config(format!("invalid session cookie: {e}")))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an absolute URL or a server-relative path such as `/media/x.png`.
    pub fn resolve(&self, raw: &str) -> Result<Url> {
        resolve_url(&self.base_url, raw)
    }

    /// Sends a GET request and fails on non-success status codes.
    pub async fn get(&self, raw: &str) -> Result<reqwest::Response> {
        let url = self.resolve(raw)?;
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(Error::Http(format!("{url}: HTTP status {}", response.status())));
        }
        Ok(response)
    }

    /// Fetches a whole response body.
    pub async fn get_bytes(&self, raw: &str) -> Result<Vec<u8>> {
        let response = self.get(raw).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    // A base without trailing slash would drop its last segment on join
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&normalized).map_err(|e| Error::Config(format!("invalid server url {raw:?}: {e}")))
}

/// Resolves `raw` against `base`. Absolute URLs are returned unchanged.
pub fn resolve_url(base: &Url, raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if let Ok(absolute) = Url::parse(raw) {
        return Ok(absolute);
    }
    base.join(raw)
        .map_err(|e| Error::Http(format!("cannot resolve {raw:?} against {base}: {e}")))
}
