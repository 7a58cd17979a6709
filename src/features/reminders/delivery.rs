//! Outbound delivery seam and its Discord implementation

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::model::OwnerId;
use crate::core::{DeliveryError, MESSAGE_LIMIT};

/// Sends text to a reminder owner.
///
/// Each call is one all-or-nothing attempt; failures are reported, never swallowed.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, owner: OwnerId, text: &str) -> Result<(), DeliveryError>;
}

/// Delivers reminders as Discord direct messages
#[derive(Clone)]
pub struct DiscordSender {
    http: Arc<Http>,
}

impl DiscordSender {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MessageSender for DiscordSender {
    async fn send_message(&self, owner: OwnerId, text: &str) -> Result<(), DeliveryError> {
        let channel = UserId(owner.0)
            .create_dm_channel(&*self.http)
            .await
            .map_err(|e| {
                debug!("Could not open DM channel with {owner}: {e}");
                DeliveryError::Unreachable(owner)
            })?;

        let content = prepare_payload(text)?;
        channel
            .say(&self.http, content)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Payload exactly as it goes out in a single Discord message.
///
/// Blank payloads become `⏰` since Discord rejects empty content. Payloads over
/// the character limit are refused whole, never split.
pub fn prepare_payload(text: &str) -> Result<&str, DeliveryError> {
    if text.trim().is_empty() {
        return Ok("⏰");
    }
    let chars = text.chars().count();
    if chars > MESSAGE_LIMIT {
        return Err(DeliveryError::PayloadTooLong(chars));
    }
    Ok(text)
}

/// Running totals of scheduler delivery attempts
#[derive(Debug, Default)]
pub struct DeliveryStats {
    attempted: AtomicU64,
    delivered: AtomicU64,
    failed: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryCounts {
    pub attempted: u64,
    pub delivered: u64,
    pub failed: u64,
}

impl DeliveryStats {
    pub fn record_success(&self) {
        self.attempted.fetch_add(1, Ordering::Relaxed);
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.attempted.fetch_add(1, Ordering::Relaxed);
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn counts(&self) -> DeliveryCounts {
        DeliveryCounts {
            attempted: self.attempted.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_counts_characters_not_bytes() {
        let text = "молоко ".repeat(171) + "ааа";
        assert_eq!(text.chars().count(), 1200);
        assert!(text.len() > MESSAGE_LIMIT);
        assert_eq!(prepare_payload(&text), Ok(text.as_str()));
    }

    #[test]
    fn test_payload_is_verbatim() {
        let text = "\n\n  indented\nlast line  \n";
        assert_eq!(prepare_payload(text), Ok(text));
    }

    #[test]
    fn test_blank_payload_placeholder() {
        assert_eq!(prepare_payload(""), Ok("⏰"));
        assert_eq!(prepare_payload(" \n "), Ok("⏰"));
    }

    #[test]
    fn test_oversized_payload_refused_whole() {
        let at_limit = "я".repeat(MESSAGE_LIMIT);
        assert_eq!(prepare_payload(&at_limit), Ok(at_limit.as_str()));

        let over = "я".repeat(MESSAGE_LIMIT + 1);
        assert_eq!(
            prepare_payload(&over),
            Err(DeliveryError::PayloadTooLong(MESSAGE_LIMIT + 1))
        );
    }

    #[test]
    fn test_stats_counts() {
        let stats = DeliveryStats::default();
        stats.record_success();
        stats.record_failure();
        stats.record_failure();
        assert_eq!(
            stats.counts(),
            DeliveryCounts {
                attempted: 3,
                delivered: 1,
                failed: 2
            }
        );
    }
}
