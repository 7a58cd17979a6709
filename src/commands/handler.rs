//! Text command handler trait
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Text commands from direct and guild messages instead of slash interactions
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::CommandContext;
use super::router::CommandInvocation;
use crate::features::reminders::UserFacingMessage;

/// Trait for text command handlers
///
/// Each handler processes one or more `/name args` commands. Handlers are
/// registered with a `CommandRegistry` and dispatched by command name.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl TextCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         _ctx: Arc<CommandContext>,
///         _invocation: &CommandInvocation,
///     ) -> Result<Option<UserFacingMessage>> {
///         Ok(Some(UserFacingMessage::new("pong")))
///     }
/// }
/// ```
#[async_trait]
pub trait TextCommandHandler: Send + Sync {
    /// Command name(s) this handler processes, lowercase and without the slash
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command
    ///
    /// Returns the reply for the caller, or `None` to stay silent.
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &CommandInvocation,
    ) -> Result<Option<UserFacingMessage>>;
}
