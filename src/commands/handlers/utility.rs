//! Utility command handlers
//!
//! Handles: start, help, ping, uptime
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Text command versions with reminder-bot welcome text
//! - 1.0.0: Extracted from command_handler.rs

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::router::CommandInvocation;
use crate::features::reminders::{messages, UserFacingMessage};

/// Handler for utility commands: start, help, ping, uptime
pub struct UtilityHandler;

#[async_trait]
impl TextCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help", "ping", "uptime"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Option<UserFacingMessage>> {
        let reply = match invocation.name.as_str() {
            "start" | "help" => messages::welcome(),
            "ping" => UserFacingMessage::new("Pong!"),
            "uptime" => UserFacingMessage::new(format!(
                "⏱️ Up for {}",
                format_uptime(ctx.start_time.elapsed())
            )),
            _ => return Ok(None),
        };
        Ok(Some(reply))
    }
}

fn format_uptime(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let days = total_secs / 86400;
    let hours = (total_secs % 86400) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utility_handler_commands() {
        let names = UtilityHandler.command_names();
        assert!(names.contains(&"start"));
        assert!(names.contains(&"help"));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(42)), "42s");
        assert_eq!(format_uptime(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 60)), "3h 1m");
        assert_eq!(format_uptime(Duration::from_secs(86400 + 7200)), "1d 2h 0m");
    }
}
