//! # Intake State Machine
//!
//! Per-owner dialogue that collects a reminder's time and text over two messages,
//! plus the parser for the single-message `HH:MM; text` form.
//!
//! ```text
//! Idle --begin--> AwaitingTime --valid time--> AwaitingText --text--> Idle
//!                   |    ^ invalid time           |
//!                   +----+                        |
//!        cancel from either waiting state ------> Idle
//! ```

use dashmap::DashMap;

use super::model::OwnerId;
use super::time::TimeLabel;
use crate::core::{ReminderError, ReminderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeState {
    #[default]
    Idle,
    AwaitingTime,
    /// The time has been captured; only this state carries it
    AwaitingText { pending_time: TimeLabel },
}

/// Result of feeding one message into an active dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeStep {
    TimeAccepted(TimeLabel),
    Completed { fire_time: TimeLabel, payload: String },
}

/// Table of in-progress dialogues keyed by owner.
///
/// Owners in `Idle` have no entry. `DashMap` shards by key so one owner's
/// dialogue never waits on another's.
pub struct IntakeSessions {
    sessions: DashMap<OwnerId, IntakeState>,
    allow_empty_payload: bool,
}

impl IntakeSessions {
    pub fn new(allow_empty_payload: bool) -> Self {
        Self {
            sessions: DashMap::new(),
            allow_empty_payload,
        }
    }

    pub fn state(&self, owner: OwnerId) -> IntakeState {
        self.sessions
            .get(&owner)
            .map(|entry| *entry.value())
            .unwrap_or_default()
    }

    pub fn is_active(&self, owner: OwnerId) -> bool {
        self.state(owner) != IntakeState::Idle
    }

    /// Start (or restart) a dialogue; any half-finished one is discarded
    pub fn begin(&self, owner: OwnerId) {
        self.sessions.insert(owner, IntakeState::AwaitingTime);
    }

    /// Abandon the owner's dialogue. Returns `false` if none was active.
    pub fn cancel(&self, owner: OwnerId) -> bool {
        self.sessions.remove(&owner).is_some()
    }

    /// Feed one inbound message into the owner's dialogue.
    ///
    /// An invalid time or a rejected empty text leaves the state unchanged so the
    /// owner can retry. Completion clears the session.
    pub fn advance(&self, owner: OwnerId, raw_text: &str) -> ReminderResult<IntakeStep> {
        let text = raw_text.trim();
        let mut entry = self
            .sessions
            .get_mut(&owner)
            .ok_or(ReminderError::UnknownOwnerSession(owner))?;

        let state = *entry.value();
        match state {
            IntakeState::Idle => Err(ReminderError::UnknownOwnerSession(owner)),
            IntakeState::AwaitingTime => {
                let pending_time = text.parse::<TimeLabel>()?;
                *entry.value_mut() = IntakeState::AwaitingText { pending_time };
                Ok(IntakeStep::TimeAccepted(pending_time))
            }
            IntakeState::AwaitingText { pending_time } => {
                if text.is_empty() && !self.allow_empty_payload {
                    return Err(ReminderError::EmptyPayload);
                }
                drop(entry);
                self.sessions.remove(&owner);
                Ok(IntakeStep::Completed {
                    fire_time: pending_time,
                    payload: text.to_string(),
                })
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Parse the single-message form `<HH:MM>; <text>`.
///
/// Splits on the first `;` only, so the text may itself contain semicolons.
pub fn parse_one_shot(raw_args: &str) -> ReminderResult<(TimeLabel, String)> {
    let (time_part, payload_part) = raw_args
        .split_once(';')
        .ok_or(ReminderError::MalformedOneShotPayload)?;

    let payload = payload_part.trim();
    if payload.is_empty() {
        return Err(ReminderError::MalformedOneShotPayload);
    }

    let fire_time = time_part.trim().parse::<TimeLabel>()?;
    Ok((fire_time, payload.to_string()))
}
