//! Reminder service: the surface the command layer and the binary talk to
//!
//! Owns the store, the dialogue table and the scheduler task lifecycle.

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use super::delivery::{DeliveryCounts, MessageSender};
use super::intake::{parse_one_shot, IntakeSessions, IntakeState, IntakeStep};
use super::messages::{self, UserFacingMessage};
use super::model::{OwnerId, Reminder, ReminderId};
use super::scheduler::DeliveryScheduler;
use super::store::ReminderStore;
use super::time::{Clock, SystemClock};
use crate::core::{Config, ReminderError};

#[derive(Debug, Clone, Copy)]
pub struct ReminderSettings {
    pub poll_interval: Duration,
    pub allow_empty_payload: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(crate::core::config::DEFAULT_POLL_INTERVAL_SECS),
            allow_empty_payload: true,
        }
    }
}

impl From<&Config> for ReminderSettings {
    fn from(config: &Config) -> Self {
        Self {
            poll_interval: config.poll_interval(),
            allow_empty_payload: config.allow_empty_payload,
        }
    }
}

struct RunningScheduler {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

pub struct ReminderService {
    store: Arc<ReminderStore>,
    sessions: IntakeSessions,
    scheduler: Arc<DeliveryScheduler>,
    running: Mutex<Option<RunningScheduler>>,
}

impl ReminderService {
    pub fn new(
        sender: Arc<dyn MessageSender>,
        clock: Arc<dyn Clock>,
        settings: ReminderSettings,
    ) -> Self {
        let store = Arc::new(ReminderStore::new());
        let scheduler = Arc::new(DeliveryScheduler::new(
            store.clone(),
            sender,
            clock,
            settings.poll_interval,
        ));
        Self {
            store,
            sessions: IntakeSessions::new(settings.allow_empty_payload),
            scheduler,
            running: Mutex::new(None),
        }
    }

    /// Service driven by the process-local wall clock
    pub fn with_system_clock(sender: Arc<dyn MessageSender>, settings: ReminderSettings) -> Self {
        Self::new(sender, Arc::new(SystemClock), settings)
    }

    /// Handle `/add <HH:MM>; <text>`. Never touches the owner's dialogue state.
    pub async fn handle_one_shot_add(&self, owner: OwnerId, raw_args: &str) -> UserFacingMessage {
        match parse_one_shot(raw_args) {
            Ok((fire_time, payload)) => {
                let id = self.store.add(owner, fire_time, payload.clone()).await;
                info!("Created reminder #{id} for {owner} at {fire_time}");
                messages::reminder_added(id, fire_time, &payload)
            }
            Err(ReminderError::MalformedTimeFormat(raw)) => {
                debug!("Rejected one-shot reminder from {owner}: bad time '{raw}'");
                messages::one_shot_time_error()
            }
            Err(e) => {
                debug!("Rejected one-shot reminder from {owner}: {e}");
                messages::parameters_not_recognized()
            }
        }
    }

    /// Handle a bare `/add`: (re)start the dialogue and ask for a time
    pub fn handle_dialogue_trigger(&self, owner: OwnerId) -> UserFacingMessage {
        self.sessions.begin(owner);
        debug!("Started reminder dialogue for {owner}");
        messages::ask_for_time()
    }

    /// Feed a free-text message into the owner's dialogue
    pub async fn handle_dialogue_input(&self, owner: OwnerId, raw_text: &str) -> UserFacingMessage {
        match self.sessions.advance(owner, raw_text) {
            Ok(IntakeStep::TimeAccepted(time)) => messages::ask_for_text(time),
            Ok(IntakeStep::Completed { fire_time, payload }) => {
                let id = self.store.add(owner, fire_time, payload.clone()).await;
                info!("Created reminder #{id} for {owner} at {fire_time} via dialogue");
                messages::reminder_added(id, fire_time, &payload)
            }
            Err(ReminderError::MalformedTimeFormat(raw)) => {
                debug!("Dialogue for {owner}: bad time '{raw}', asking again");
                messages::dialogue_time_error()
            }
            Err(ReminderError::EmptyPayload) => messages::empty_payload(),
            Err(e) => {
                debug!("Dialogue input from {owner} ignored: {e}");
                messages::no_active_dialogue()
            }
        }
    }

    pub fn handle_cancel(&self, owner: OwnerId) -> UserFacingMessage {
        if self.sessions.cancel(owner) {
            debug!("Cancelled reminder dialogue for {owner}");
            messages::dialogue_cancelled()
        } else {
            messages::nothing_to_cancel()
        }
    }

    /// Handle `/delete <id>` for one of the owner's reminders
    pub async fn handle_delete(&self, owner: OwnerId, raw_id: &str) -> UserFacingMessage {
        let id = match raw_id.trim().trim_start_matches('#').parse::<u64>() {
            Ok(id) => ReminderId(id),
            Err(_) => return messages::delete_usage(),
        };

        match self.store.remove_owned(owner, id).await {
            Ok(_) => {
                info!("Deleted reminder #{id} for {owner}");
                messages::reminder_deleted(id)
            }
            Err(e) => {
                debug!("Delete from {owner} failed: {e}");
                messages::reminder_not_found(id)
            }
        }
    }

    /// Every pending reminder, oldest first
    pub async fn list_pending(&self) -> Vec<Reminder> {
        self.store.snapshot().await
    }

    pub async fn list_pending_for(&self, owner: OwnerId) -> Vec<Reminder> {
        self.store.pending_for(owner).await
    }

    pub fn dialogue_state(&self, owner: OwnerId) -> IntakeState {
        self.sessions.state(owner)
    }

    pub fn is_in_dialogue(&self, owner: OwnerId) -> bool {
        self.sessions.is_active(owner)
    }

    pub fn delivery_counts(&self) -> DeliveryCounts {
        self.scheduler.delivery_counts()
    }

    pub fn scheduler(&self) -> &Arc<DeliveryScheduler> {
        &self.scheduler
    }

    /// Spawn the delivery loop. Returns `false` if it was already running.
    pub async fn start_scheduler(&self) -> bool {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return false;
        }

        let (shutdown, rx) = watch::channel(false);
        let scheduler = self.scheduler.clone();
        let task = tokio::spawn(async move { scheduler.run(rx).await });
        *running = Some(RunningScheduler { shutdown, task });
        true
    }

    /// Signal the delivery loop to stop and wait for it to finish.
    /// Returns `false` if it was not running.
    pub async fn stop_scheduler(&self) -> bool {
        let running = self.running.lock().await.take();
        let Some(RunningScheduler { shutdown, task }) = running else {
            return false;
        };

        // A send error only means the loop already exited
        let _ = shutdown.send(true);
        if let Err(e) = task.await {
            warn!("Reminder scheduler task ended abnormally: {e}");
        }
        true
    }

    pub async fn is_scheduler_running(&self) -> bool {
        self.running.lock().await.is_some()
    }
}
