//! Per-command handler implementations
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 3.0.0: Text command handlers for the reminder bot (RemindHandler, UtilityHandler)
//! - 1.0.0: Initial extraction from monolithic command_handler.rs

pub mod remind;
pub mod utility;

use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Create all registered command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn TextCommandHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(remind::RemindHandler),
    ]
}
