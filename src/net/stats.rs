// SPDX-License-Identifier: MPL-2.0
//! One-shot user statistics fetch.
//!
//! The result is only logged. Nothing in the UI depends on it.

use super::client::HttpClient;
use crate::config::defaults::STATS_ENDPOINT;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Known shape of the stats body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserStats {
    pub total_generations: u64,
    pub total_images: u64,
    #[serde(default)]
    pub last_generation: Option<String>,
}

impl UserStats {
    /// Extracts the known fields, if the body has them.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// Requests the stats endpoint and returns the parsed JSON body.
pub async fn fetch_user_stats(client: HttpClient) -> Result<Value> {
    let body = client.get_bytes(STATS_ENDPOINT).await?;
    serde_json::from_slice(&body).map_err(|e| Error::Http(format!("invalid stats body: {e}")))
}

/// Logs the outcome of [`fetch_user_stats`].
pub fn log_stats_result(result: &Result<Value>) {
    match result {
        Ok(value) => match UserStats::from_value(value) {
            Some(stats) => tracing::info!(
                total_generations = stats.total_generations,
                total_images = stats.total_images,
                last_generation = stats.last_generation.as_deref().unwrap_or("never"),
                "User stats"
            ),
            None => tracing::info!(stats = %value, "User stats"),
        },
        Err(err) => tracing::error!(error = %err, "Error fetching stats"),
    }
}
