// Core layer - configuration, errors, message utilities
pub mod core;

// Features layer - reminder store, intake and delivery
pub mod features;

// Application layer - text command routing
pub mod commands;

pub use core::Config;

pub use features::reminders::{
    DeliveryScheduler, DiscordSender, MessageSender, OwnerId, Reminder, ReminderId,
    ReminderService, ReminderSettings, ReminderStore, TimeLabel, UserFacingMessage,
};

pub use commands::CommandRouter;
