//! Domain error types
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use thiserror::Error;

use crate::features::reminders::{OwnerId, ReminderId};

/// Outbound delivery failure reported by a `MessageSender`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("recipient {0} is unreachable")]
    Unreachable(OwnerId),
    #[error("payload of {0} characters exceeds the message limit")]
    PayloadTooLong(usize),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors raised while registering, collecting or delivering reminders
///
/// Input errors end the current handling call with a user-facing message;
/// delivery failures stay inside the scheduler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReminderError {
    #[error("'{0}' is not a valid HH:MM time")]
    MalformedTimeFormat(String),
    #[error("parameters not recognized")]
    MalformedOneShotPayload,
    #[error("reminder text is empty")]
    EmptyPayload,
    #[error("no active dialogue for {0}")]
    UnknownOwnerSession(OwnerId),
    #[error("reminder #{0} not found")]
    UnknownReminder(ReminderId),
    #[error("delivery failed: {0}")]
    DeliveryFailure(#[from] DeliveryError),
}

pub type ReminderResult<T> = std::result::Result<T, ReminderError>;
