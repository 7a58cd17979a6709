use anyhow::{Context as _, Result};
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use minute_bell::commands::{CommandContext, CommandRouter};
use minute_bell::core::{chunk_for_message, Config};
use minute_bell::features::reminders::{
    DiscordSender, OwnerId, ReminderService, ReminderSettings,
};

struct Handler {
    router: Arc<CommandRouter>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let owner = OwnerId(msg.author.id.0);
        let reply = match self.router.route(owner, &msg.content).await {
            Ok(Some(reply)) => reply.into_text(),
            Ok(None) => return,
            Err(e) => {
                error!("Error handling message from {owner}: {e:#}");
                "Sorry, I encountered an error processing your message.".to_string()
            }
        };

        for chunk in chunk_for_message(&reply) {
            if let Err(why) = msg.channel_id.say(&ctx.http, chunk).await {
                error!("Failed to send reply to {owner}: {why}");
                break;
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting reminder bot...");
    info!(
        "Reminder settings: poll every {}s, empty dialogue text {}",
        config.poll_interval_secs,
        if config.allow_empty_payload { "accepted" } else { "rejected" }
    );

    // Outbound delivery uses its own HTTP client so the service exists before the gateway client
    let http = Arc::new(Http::new(&config.discord_token));
    let sender = Arc::new(DiscordSender::new(http));
    let reminders = Arc::new(ReminderService::with_system_clock(
        sender,
        ReminderSettings::from(&config),
    ));

    let router = Arc::new(CommandRouter::new(CommandContext::new(reminders.clone())));
    let handler = Handler { router };

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .context("Failed to create Discord client")?;

    reminders.start_scheduler().await;

    // Stop the scheduler and the gateway on Ctrl-C
    let shard_manager = client.shard_manager.clone();
    let shutdown_reminders = reminders.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {e}");
            return;
        }
        info!("Shutdown requested");
        shutdown_reminders.stop_scheduler().await;
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Establishing WebSocket connection to Discord gateway...");
    let result = client.start().await;

    if reminders.stop_scheduler().await {
        warn!("Gateway exited before shutdown was requested; scheduler stopped");
    }
    let pending = reminders.list_pending().await.len();
    if pending > 0 {
        info!("Exiting with {pending} undelivered reminder(s); they are not persisted");
    }

    result.context("Failed to establish gateway connection")?;
    Ok(())
}
