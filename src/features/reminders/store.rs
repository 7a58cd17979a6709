//! In-memory reminder store shared by the intake path and the scheduler
//!
//! Reminders live in a `BTreeMap` keyed by id. Ids are allocated under the same
//! write lock that inserts the record, so key order is insertion order and a
//! snapshot is always returned oldest-first.

use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::model::{OwnerId, Reminder, ReminderId};
use super::time::TimeLabel;
use crate::core::{ReminderError, ReminderResult};

#[derive(Default)]
struct StoreInner {
    last_id: u64,
    reminders: BTreeMap<ReminderId, Reminder>,
}

/// Concurrency-safe collection of pending reminders
#[derive(Default)]
pub struct ReminderStore {
    inner: RwLock<StoreInner>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new reminder and return its freshly assigned id
    pub async fn add(
        &self,
        owner: OwnerId,
        fire_time: TimeLabel,
        payload: impl Into<String>,
    ) -> ReminderId {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = ReminderId(inner.last_id);
        inner.reminders.insert(
            id,
            Reminder {
                id,
                owner,
                fire_time,
                payload: payload.into(),
            },
        );
        id
    }

    /// Point-in-time copy of every pending reminder in insertion order
    pub async fn snapshot(&self) -> Vec<Reminder> {
        self.inner.read().await.reminders.values().cloned().collect()
    }

    /// Remove a reminder if it is still present.
    ///
    /// Returns `false` when it was already gone; that is not an error.
    pub async fn remove_by_id(&self, id: ReminderId) -> bool {
        self.inner.write().await.reminders.remove(&id).is_some()
    }

    /// Remove a reminder only if it belongs to `owner`.
    ///
    /// Someone else's reminder is reported as unknown, same as a missing one.
    pub async fn remove_owned(&self, owner: OwnerId, id: ReminderId) -> ReminderResult<Reminder> {
        let mut inner = self.inner.write().await;
        match inner.reminders.get(&id) {
            Some(reminder) if reminder.owner == owner => inner
                .reminders
                .remove(&id)
                .ok_or(ReminderError::UnknownReminder(id)),
            _ => Err(ReminderError::UnknownReminder(id)),
        }
    }

    /// Snapshot filtered to one owner's reminders
    pub async fn pending_for(&self, owner: OwnerId) -> Vec<Reminder> {
        self.inner
            .read()
            .await
            .reminders
            .values()
            .filter(|r| r.owner == owner)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.reminders.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.reminders.is_empty()
    }
}
