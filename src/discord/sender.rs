//! Message delivery with bounded retries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use tracing::{error, info, warn};

use crate::error::AppError;

#[async_trait]
/// A way to post a message to a channel.
pub trait MessageSender: Send + Sync {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        msg: CreateMessage,
    ) -> serenity::Result<()>;
}

/// REST only sender, no gateway connection needed.
pub type HttpSender = Arc<Http>;

pub fn http_sender(token: &str) -> HttpSender {
    Arc::new(Http::new(token))
}

#[async_trait]
impl MessageSender for Arc<Http> {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        msg: CreateMessage,
    ) -> serenity::Result<()> {
        channel_id.send_message(self, msg).await.map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total tries per message, the first one included.
    pub attempts: u32,
    /// Fixed wait between two tries.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Sends a sequence of messages to one channel.
#[derive(Debug, Clone)]
pub struct Publisher<S> {
    sender: S,
    channel_id: ChannelId,
    retry: RetryPolicy,
    /// Wait between two consecutive messages.
    pause: Duration,
}

impl<S: MessageSender> Publisher<S> {
    pub fn new(sender: S, channel_id: ChannelId, retry: RetryPolicy) -> Self {
        Self {
            sender,
            channel_id,
            retry,
            pause: Duration::from_secs(1),
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Send one message, retrying failures up to the policy's attempt count.
    pub async fn send(&self, msg: CreateMessage) -> Result<(), AppError> {
        let attempts = self.retry.attempts.max(1);
        let mut attempt = 1;

        loop {
            match self
                .sender
                .send_message(self.channel_id, msg.clone())
                .await
            {
                Ok(()) => return Ok(()),
                Err(e) if attempt < attempts => {
                    warn!(
                        channel_id = %self.channel_id,
                        attempt,
                        attempts,
                        error = %e,
                        "📨 ⚠️ Discord send failed, retrying"
                    );
                    tokio::time::sleep(self.retry.delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!(
                        channel_id = %self.channel_id,
                        attempts,
                        error = %e,
                        "📨 ❌ Discord send failed, giving up"
                    );
                    return Err(e.into());
                }
            }
        }
    }

    /// Send every message in order.
    ///
    /// A message that exhausts its retries does not stop the rest; the last
    /// such error is returned once everything has been tried.
    pub async fn publish(&self, messages: Vec<CreateMessage>) -> Result<(), AppError> {
        let total = messages.len();
        let mut failure = None;
        let mut delivered = 0;

        for (idx, msg) in messages.into_iter().enumerate() {
            if idx > 0 {
                tokio::time::sleep(self.pause).await;
            }
            match self.send(msg).await {
                Ok(()) => delivered += 1,
                Err(e) => failure = Some(e),
            }
        }

        info!(channel_id = %self.channel_id, delivered, total, "📨 Published messages");

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
