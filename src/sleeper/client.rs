use std::fmt::Debug;
use std::num::NonZeroU32;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Sleeper documents a soft limit of 1000 calls per minute.
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: NonZeroU32 = nonzero!(600_u32);

#[derive(Debug)]
pub struct SleeperClient {
    pub client: reqwest::Client,
    pub limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    base_url: String,
}

impl Default for SleeperClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_PER_MINUTE)
    }
}

impl SleeperClient {
    pub fn new(base_url: impl Into<String>, per_minute: NonZeroU32) -> Self {
        let base_url: String = base_url.into();

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(Quota::per_minute(per_minute)),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` relative to the base url and decode the JSON body.
    pub async fn get<T: DeserializeOwned + Debug>(&self, path: &str) -> Result<T, AppError> {
        self.limiter.until_ready().await;

        let url = self.url(path);
        debug!(url = %url, "🌐 Sleeper request");

        let res = self.client.get(&url).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => {
                let message = res.text().await.unwrap_or_default();
                warn!(url = %url, status = status.as_u16(), "🌐 ❌ Sleeper request failed");
                Err(AppError::SleeperApi {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
