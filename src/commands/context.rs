//! Shared context for command handlers
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;
use std::time::Instant;

use crate::features::reminders::ReminderService;

/// Shared state handed to every command handler
#[derive(Clone)]
pub struct CommandContext {
    pub reminders: Arc<ReminderService>,
    pub start_time: Instant,
}

impl CommandContext {
    pub fn new(reminders: Arc<ReminderService>) -> Self {
        Self {
            reminders,
            start_time: Instant::now(),
        }
    }
}
