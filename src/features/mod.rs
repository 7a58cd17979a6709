//! # Features Layer

pub mod reminders;

pub use reminders::{DeliveryScheduler, ReminderService, ReminderSettings};
