//! Reminder command handlers
//!
//! Handles: add, cancel, delete, reminders, abc
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: `/add` one-shot and dialogue forms, `/cancel`, `/delete`, `/abc` debug dump
//! - 1.0.0: Extracted from command_handler.rs

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::commands::router::CommandInvocation;
use crate::features::reminders::{messages, UserFacingMessage};

/// Handler for reminder-related commands
pub struct RemindHandler;

#[async_trait]
impl TextCommandHandler for RemindHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["add", "cancel", "delete", "reminders", "abc"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Option<UserFacingMessage>> {
        let reminders = &ctx.reminders;
        let owner = invocation.owner;

        let reply = match invocation.name.as_str() {
            "add" if invocation.args.is_empty() => reminders.handle_dialogue_trigger(owner),
            "add" => reminders.handle_one_shot_add(owner, &invocation.args).await,
            "cancel" => reminders.handle_cancel(owner),
            "delete" => reminders.handle_delete(owner, &invocation.args).await,
            "reminders" => messages::own_reminders(&reminders.list_pending_for(owner).await),
            "abc" => {
                debug!(
                    "[{}] Dumping pending reminders for {owner}",
                    invocation.request_id
                );
                messages::pending_dump(&reminders.list_pending().await, reminders.delivery_counts())
                    .context("Failed to render pending reminders")?
            }
            _ => return Ok(None),
        };
        Ok(Some(reply))
    }
}
