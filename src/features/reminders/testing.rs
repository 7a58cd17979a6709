//! Test doubles for the clock and the outbound sender

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

use super::delivery::MessageSender;
use super::model::OwnerId;
use super::time::{Clock, TimeLabel};
use crate::core::DeliveryError;

pub struct FakeClock {
    label: Mutex<TimeLabel>,
}

impl FakeClock {
    pub fn new(label: TimeLabel) -> Self {
        Self {
            label: Mutex::new(label),
        }
    }

    pub fn set(&self, label: TimeLabel) {
        *self.label.lock().unwrap() = label;
    }
}

impl Clock for FakeClock {
    fn now_label(&self) -> TimeLabel {
        *self.label.lock().unwrap()
    }
}

/// Records successful sends; can fail the first N attempts or specific owners
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(OwnerId, String)>>,
    attempts: AtomicUsize,
    failures_left: AtomicUsize,
    fail_on_attempt: Option<usize>,
    unreachable: HashSet<OwnerId>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(attempts: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(attempts),
            ..Self::default()
        }
    }

    /// Fail only the `attempt`-th call (1-based)
    pub fn failing_on_attempt(attempt: usize) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Self::default()
        }
    }

    pub fn unreachable(mut self, owner: OwnerId) -> Self {
        self.unreachable.insert(owner);
        self
    }

    pub fn sent(&self) -> Vec<(OwnerId, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_message(&self, owner: OwnerId, text: &str) -> Result<(), DeliveryError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_attempt == Some(attempt) {
            return Err(DeliveryError::Transport("connection reset".to_string()));
        }
        if self.unreachable.contains(&owner) {
            return Err(DeliveryError::Unreachable(owner));
        }
        let should_fail = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(DeliveryError::Transport("simulated outage".to_string()));
        }
        self.sent.lock().unwrap().push((owner, text.to_string()));
        Ok(())
    }
}

/// Pauses inside every send until released, then records it
#[derive(Default)]
pub struct BlockingSender {
    entered: Notify,
    release: Notify,
    inner: RecordingSender,
}

impl BlockingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until a send has started and is parked
    pub async fn wait_until_sending(&self) {
        self.entered.notified().await;
    }

    /// Let one parked send complete
    pub fn release_one(&self) {
        self.release.notify_one();
    }

    pub fn sent(&self) -> Vec<(OwnerId, String)> {
        self.inner.sent()
    }
}

#[async_trait]
impl MessageSender for BlockingSender {
    async fn send_message(&self, owner: OwnerId, text: &str) -> Result<(), DeliveryError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.send_message(owner, text).await
    }
}
