//! # Core Module
//!
//! Configuration, error types and Discord message utilities.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod error;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use error::{DeliveryError, ReminderError, ReminderResult};
pub use response::{chunk_for_message, chunk_text, MESSAGE_LIMIT};
