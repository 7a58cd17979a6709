//! User-facing reply texts

use serde::Serialize;
use std::fmt;

use super::delivery::DeliveryCounts;
use super::model::{Reminder, ReminderId};
use super::time::TimeLabel;

/// A reply destined for the user who sent the inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFacingMessage {
    text: String,
}

impl UserFacingMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for UserFacingMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn welcome() -> UserFacingMessage {
    UserFacingMessage::new(
        "👋 Welcome to the reminder bot!\n\
         Commands:\n\
         `/add` — add a reminder step by step\n\
         `/add <HH:MM>; <text>` — add a reminder in one message\n\
         `/cancel` — abandon the step-by-step dialogue\n\
         `/reminders` — list your pending reminders\n\
         `/delete <id>` — delete one of your reminders",
    )
}

pub fn ask_for_time() -> UserFacingMessage {
    UserFacingMessage::new("🕐 Send the time in HH:MM format")
}

pub fn ask_for_text(time: TimeLabel) -> UserFacingMessage {
    UserFacingMessage::new(format!("✅ Got it: {time}. Now send the reminder text:"))
}

pub fn dialogue_time_error() -> UserFacingMessage {
    UserFacingMessage::new("❌ Wrong format. Give the time as HH:MM (for example 17:30).")
}

pub fn one_shot_time_error() -> UserFacingMessage {
    UserFacingMessage::new("❌ Wrong time format. Use HH:MM.")
}

pub fn parameters_not_recognized() -> UserFacingMessage {
    UserFacingMessage::new(
        "❌ Parameters not recognized. Use `/add <HH:MM>; <text>` or just `/add`.",
    )
}

pub fn empty_payload() -> UserFacingMessage {
    UserFacingMessage::new("❌ The reminder text can't be empty. Send the text:")
}

pub fn reminder_added(id: ReminderId, time: TimeLabel, text: &str) -> UserFacingMessage {
    UserFacingMessage::new(format!(
        "⏰ Reminder added: {time} — {text}\n\n*Reminder ID: #{id}*"
    ))
}

pub fn dialogue_cancelled() -> UserFacingMessage {
    UserFacingMessage::new("🚫 Cancelled. Nothing was saved.")
}

pub fn nothing_to_cancel() -> UserFacingMessage {
    UserFacingMessage::new("There is nothing to cancel.")
}

pub fn delete_usage() -> UserFacingMessage {
    UserFacingMessage::new(
        "❌ Please provide a reminder ID to delete. Use `/reminders` to see your reminder IDs.",
    )
}

pub fn reminder_deleted(id: ReminderId) -> UserFacingMessage {
    UserFacingMessage::new(format!("✅ Deleted reminder #{id}."))
}

pub fn reminder_not_found(id: ReminderId) -> UserFacingMessage {
    UserFacingMessage::new(format!("❌ Reminder #{id} not found or doesn't belong to you."))
}

/// The caller's own pending reminders
pub fn own_reminders(reminders: &[Reminder]) -> UserFacingMessage {
    if reminders.is_empty() {
        return UserFacingMessage::new(
            "📋 You don't have any pending reminders.\n\nUse `/add` to create one!",
        );
    }

    let mut list = String::from("📋 **Your pending reminders:**\n\n");
    for reminder in reminders {
        list.push_str(&format!(
            "**#{}** - {}\n> {}\n",
            reminder.id, reminder.fire_time, reminder.payload
        ));
    }
    list.push_str("\n*Use `/delete <id>` to delete a reminder.*");
    UserFacingMessage::new(list)
}

pub fn no_active_dialogue() -> UserFacingMessage {
    UserFacingMessage::new("No reminder is being added right now. Use `/add` to start.")
}

#[derive(Serialize)]
struct PendingDump<'a> {
    pending: &'a [Reminder],
    deliveries: DeliveryCounts,
}

/// Raw JSON dump of every pending reminder plus delivery totals
pub fn pending_dump(
    reminders: &[Reminder],
    deliveries: DeliveryCounts,
) -> serde_json::Result<UserFacingMessage> {
    let json = serde_json::to_string_pretty(&PendingDump {
        pending: reminders,
        deliveries,
    })?;
    Ok(UserFacingMessage::new(format!("```json\n{json}\n```")))
}
