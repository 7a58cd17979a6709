//! Inbound message routing
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! Known commands always go to their handler. Anything else is dialogue input
//! when the owner is mid-dialogue, and is ignored otherwise.

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::context::CommandContext;
use super::handlers::create_all_handlers;
use super::registry::CommandRegistry;
use crate::features::reminders::{OwnerId, UserFacingMessage};

/// A parsed `/name[@bot] args` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub request_id: Uuid,
    pub owner: OwnerId,
    /// Lowercase command name without the slash or `@bot` suffix
    pub name: String,
    /// Everything after the name, trimmed
    pub args: String,
}

impl CommandInvocation {
    /// Returns `None` when `text` is not a command
    pub fn parse(request_id: Uuid, owner: OwnerId, text: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        let (head, args) = match rest.split_once(char::is_whitespace) {
            Some((head, args)) => (head, args.trim()),
            None => (rest, ""),
        };
        let name = head.split('@').next().unwrap_or_default().to_lowercase();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            request_id,
            owner,
            name,
            args: args.to_string(),
        })
    }
}

pub struct CommandRouter {
    ctx: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandRouter {
    pub fn new(ctx: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        Self {
            ctx: Arc::new(ctx),
            registry,
        }
    }

    pub fn context(&self) -> &Arc<CommandContext> {
        &self.ctx
    }

    /// Route one inbound message and return the reply, if any
    pub async fn route(&self, owner: OwnerId, text: &str) -> Result<Option<UserFacingMessage>> {
        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] 📥 Message received | User: {owner} | Content: '{}'",
            text.chars().take(100).collect::<String>()
        );

        if let Some(invocation) = CommandInvocation::parse(request_id, owner, text) {
            if let Some(handler) = self.registry.get(&invocation.name) {
                info!("[{request_id}] 🎯 Processing command: /{}", invocation.name);
                return handler.handle(self.ctx.clone(), &invocation).await;
            }
            debug!("[{request_id}] Unknown command /{}", invocation.name);
        }

        if self.ctx.reminders.is_in_dialogue(owner) {
            debug!("[{request_id}] 💬 Treating message as dialogue input");
            let reply = self.ctx.reminders.handle_dialogue_input(owner, text).await;
            return Ok(Some(reply));
        }

        debug!("[{request_id}] No active dialogue for {owner}, ignoring message");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reminders::messages;
    use crate::features::reminders::testing::{FakeClock, RecordingSender};
    use crate::features::reminders::{IntakeState, ReminderService, ReminderSettings, TimeLabel};

    const OWNER: OwnerId = OwnerId(9);

    fn router() -> CommandRouter {
        let service = ReminderService::new(
            Arc::new(RecordingSender::new()),
            Arc::new(FakeClock::new(TimeLabel::new(0, 0).unwrap())),
            ReminderSettings::default(),
        );
        CommandRouter::new(CommandContext::new(Arc::new(service)))
    }

    async fn reply(router: &CommandRouter, text: &str) -> Option<String> {
        router
            .route(OWNER, text)
            .await
            .unwrap()
            .map(UserFacingMessage::into_text)
    }

    #[test]
    fn test_parse_invocation() {
        let id = Uuid::new_v4();
        let inv = CommandInvocation::parse(id, OWNER, "  /ADD@MinuteBell  09:05; tea ").unwrap();
        assert_eq!(inv.name, "add");
        assert_eq!(inv.args, "09:05; tea");

        let bare = CommandInvocation::parse(id, OWNER, "/add").unwrap();
        assert_eq!(bare.args, "");

        assert!(CommandInvocation::parse(id, OWNER, "add 09:05; tea").is_none());
        assert!(CommandInvocation::parse(id, OWNER, "/").is_none());
        assert!(CommandInvocation::parse(id, OWNER, "/ add").is_none());
    }

    #[tokio::test]
    async fn test_one_shot_through_router() {
        let router = router();
        let text = reply(&router, "/add 09:05; buy milk").await.unwrap();
        assert!(text.contains("09:05 — buy milk"));

        let pending = router.context().reminders.list_pending().await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].payload, "buy milk");
    }

    #[tokio::test]
    async fn test_one_shot_rejections_through_router() {
        let router = router();
        assert_eq!(
            reply(&router, "/add 09:05").await,
            Some(messages::parameters_not_recognized().into_text())
        );
        assert_eq!(
            reply(&router, "/add 25:61; x").await,
            Some(messages::one_shot_time_error().into_text())
        );
        assert!(router.context().reminders.list_pending().await.is_empty());
        assert_eq!(
            router.context().reminders.dialogue_state(OWNER),
            IntakeState::Idle
        );
    }

    #[tokio::test]
    async fn test_dialogue_through_router() {
        let router = router();
        assert_eq!(
            reply(&router, "/add").await,
            Some(messages::ask_for_time().into_text())
        );
        assert_eq!(
            reply(&router, "tomorrow").await,
            Some(messages::dialogue_time_error().into_text())
        );
        reply(&router, "06:45").await;
        let done = reply(&router, "feed the cat").await.unwrap();
        assert!(done.contains("06:45 — feed the cat"));

        let pending = router.context().reminders.list_pending().await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_time, TimeLabel::new(6, 45).unwrap());
        assert!(!router.context().reminders.is_in_dialogue(OWNER));
    }

    #[tokio::test]
    async fn test_free_text_without_dialogue_is_ignored() {
        let router = router();
        assert_eq!(reply(&router, "hello there").await, None);
        assert_eq!(reply(&router, "/unknown").await, None);
    }

    #[tokio::test]
    async fn test_cancel_through_router() {
        let router = router();
        reply(&router, "/add").await;
        assert_eq!(
            reply(&router, "/cancel").await,
            Some(messages::dialogue_cancelled().into_text())
        );
        assert_eq!(reply(&router, "07:00").await, None);
    }

    #[tokio::test]
    async fn test_unknown_command_mid_dialogue_is_input() {
        let router = router();
        reply(&router, "/add").await;
        assert_eq!(
            reply(&router, "/later").await,
            Some(messages::dialogue_time_error().into_text())
        );
    }
}
