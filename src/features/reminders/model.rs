//! Reminder records and identifiers

use serde::Serialize;
use std::fmt;

use super::time::TimeLabel;

/// Identity of a reminder recipient (a Discord user id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct OwnerId(pub u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-unique reminder id, assigned in creation order and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ReminderId(pub u64);

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub owner: OwnerId,
    pub fire_time: TimeLabel,
    pub payload: String,
}

impl Reminder {
    pub fn is_due_at(&self, label: TimeLabel) -> bool {
        self.fire_time == label
    }
}
