//! # Feature: Reminders
//!
//! One-shot `HH:MM` reminders delivered by direct message. Reminders are added
//! with `/add <HH:MM>; <text>` or through a two-step `/add` dialogue, held in
//! memory only, and delivered by a polling scheduler at the matching minute.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Minute-label reminders with in-memory store, dialogue intake and cancellable scheduler
//! - 1.0.0: Initial release with duration-based reminders

pub mod delivery;
pub mod intake;
pub mod messages;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod store;
pub mod time;

#[cfg(test)]
pub(crate) mod testing;

pub use delivery::{DeliveryCounts, DeliveryStats, DiscordSender, MessageSender};
pub use intake::{parse_one_shot, IntakeSessions, IntakeState, IntakeStep};
pub use messages::UserFacingMessage;
pub use model::{OwnerId, Reminder, ReminderId};
pub use scheduler::{DeliveryScheduler, TickReport};
pub use service::{ReminderService, ReminderSettings};
pub use store::ReminderStore;
pub use time::{Clock, SystemClock, TimeLabel};
