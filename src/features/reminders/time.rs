//! Minute-granularity time labels and the clock the scheduler reads them from

use chrono::Timelike;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::core::ReminderError;

static HH_MM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("HH:MM pattern is valid")
});

/// Time of day with minute precision, rendered as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeLabel {
    hour: u8,
    minute: u8,
}

impl TimeLabel {
    /// Returns `None` when hour > 23 or minute > 59
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(TimeLabel { hour, minute })
    }

    /// Truncate any chrono time value to its minute label
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        TimeLabel {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeLabel {
    type Err = ReminderError;

    /// Strict `HH:MM`: two-digit hour 00-23, two-digit minute 00-59, nothing else
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ReminderError::MalformedTimeFormat(s.to_string());
        let caps = HH_MM.captures(s).ok_or_else(malformed)?;
        let hour = caps[1].parse::<u8>().map_err(|_| malformed())?;
        let minute = caps[2].parse::<u8>().map_err(|_| malformed())?;
        TimeLabel::new(hour, minute).ok_or_else(malformed)
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Source of the current minute label for the delivery scheduler
pub trait Clock: Send + Sync {
    fn now_label(&self) -> TimeLabel;
}

/// Process-local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> TimeLabel {
        TimeLabel::from_time(&chrono::Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_accepts_every_valid_label() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let text = format!("{hour:02}:{minute:02}");
                let label: TimeLabel = text.parse().unwrap();
                assert_eq!(label.hour(), hour);
                assert_eq!(label.minute(), minute);
                assert_eq!(label.to_string(), text);
            }
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        for bad in ["24:00", "25:61", "23:60", "99:99"] {
            assert_eq!(
                bad.parse::<TimeLabel>(),
                Err(ReminderError::MalformedTimeFormat(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_shapes() {
        for bad in [
            "", "9:05", "09:5", "0905", "09-05", " 09:05", "09:05 ", "09 :05", "9:05 AM",
            "09:05pm", "09:05:00", "１２:００", "ab:cd", "09:05\n",
        ] {
            assert!(bad.parse::<TimeLabel>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_new_bounds() {
        assert!(TimeLabel::new(23, 59).is_some());
        assert!(TimeLabel::new(24, 0).is_none());
        assert!(TimeLabel::new(0, 60).is_none());
    }

    #[test]
    fn test_from_time_truncates_seconds() {
        let time = NaiveTime::from_hms_opt(9, 5, 59).unwrap();
        assert_eq!(TimeLabel::from_time(&time), TimeLabel::new(9, 5).unwrap());
    }

    #[test]
    fn test_serializes_as_label() {
        let label = TimeLabel::new(7, 3).unwrap();
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"07:03\"");
    }
}
