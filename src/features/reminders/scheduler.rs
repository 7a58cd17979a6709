//! # Delivery Scheduler
//!
//! Polls the reminder store on a fixed interval and delivers every reminder whose
//! fire time equals the current minute label.
//!
//! Matching is by label equality while ticks are sub-minute, so a reminder whose
//! send fails is retried on each tick for as long as its minute lasts. After the
//! minute rolls over it stays in the store untouched until the same label comes
//! round again. Successful sends are removed right away.

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use super::delivery::{DeliveryCounts, DeliveryStats, MessageSender};
use super::model::ReminderId;
use super::store::ReminderStore;
use super::time::{Clock, TimeLabel};
use crate::core::ReminderError;

/// Outcome of a single poll-and-deliver cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub label: TimeLabel,
    pub delivered: Vec<ReminderId>,
    pub failed: Vec<ReminderId>,
}

impl TickReport {
    pub fn due(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}

pub struct DeliveryScheduler {
    store: Arc<ReminderStore>,
    sender: Arc<dyn MessageSender>,
    clock: Arc<dyn Clock>,
    interval: Duration,
    stats: DeliveryStats,
}

impl DeliveryScheduler {
    pub fn new(
        store: Arc<ReminderStore>,
        sender: Arc<dyn MessageSender>,
        clock: Arc<dyn Clock>,
        interval: Duration,
    ) -> Self {
        Self {
            store,
            sender,
            clock,
            interval,
            stats: DeliveryStats::default(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn delivery_counts(&self) -> DeliveryCounts {
        self.stats.counts()
    }

    /// Run one cycle: snapshot, match against the current label, send in order.
    ///
    /// No lock is held while sending. A failed send leaves the reminder in place
    /// and does not stop the rest of the batch.
    pub async fn tick(&self) -> TickReport {
        let label = self.clock.now_label();
        let due: Vec<_> = self
            .store
            .snapshot()
            .await
            .into_iter()
            .filter(|r| r.is_due_at(label))
            .collect();

        let mut report = TickReport {
            label,
            delivered: Vec::new(),
            failed: Vec::new(),
        };

        for reminder in due {
            match self.sender.send_message(reminder.owner, &reminder.payload).await {
                Ok(()) => {
                    self.store.remove_by_id(reminder.id).await;
                    self.stats.record_success();
                    info!(
                        "⏰ Reminder #{} delivered to {} ({})",
                        reminder.id, reminder.owner, label
                    );
                    report.delivered.push(reminder.id);
                }
                Err(e) => {
                    self.stats.record_failure();
                    let err = ReminderError::from(e);
                    warn!(
                        "Reminder #{} for {}: {err}. Will retry while {label} lasts",
                        reminder.id, reminder.owner
                    );
                    report.failed.push(reminder.id);
                }
            }
        }

        if report.due() > 0 {
            debug!(
                "Tick {label}: {} delivered, {} failed",
                report.delivered.len(),
                report.failed.len()
            );
        }
        report
    }

    /// Tick until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// The wait between ticks is interrupted as soon as shutdown is signalled.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(
            "Reminder scheduler started (interval: {}s)",
            self.interval.as_secs_f64()
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            self.tick().await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Reminder scheduler stopped");
    }
}
