//! Task data structure and related functionality.
//!
//! A task carries free-text content, a due date, a due time and a priority.
//! Dates and times are persisted as plain integer arrays (`[year, month, day]`
//! and `[hour, minute]`) and checked for calendar/clock validity on the way in,
//! so a record that deserializes is always well-formed.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

use crate::fields::{Priority, Urgency};

/// A single entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "non_blank")]
    pub content: String,
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    #[serde(with = "hm")]
    pub time: NaiveTime,
    pub priority: Priority,
}

impl Task {
    pub fn new(content: String, date: NaiveDate, time: NaiveTime, priority: Priority) -> Self {
        Task {
            content,
            date,
            time,
            priority,
        }
    }

    /// Urgency of this task relative to `today`.
    pub fn urgency(&self, today: NaiveDate) -> Urgency {
        Urgency::classify(self.date, today)
    }
}

/// Build a time of day from hour and minute, using `scaffold` as the date the
/// timestamp is anchored to. Only the clock part is kept.
pub fn time_from_hm(hour: u32, minute: u32, scaffold: NaiveDate) -> Option<NaiveTime> {
    scaffold.and_hms_opt(hour, minute, 0).map(|dt| dt.time())
}

fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let content = String::deserialize(deserializer)?;
    if content.trim().is_empty() {
        return Err(serde::de::Error::custom("task content is blank"));
    }
    Ok(content)
}

mod ymd {
    use chrono::{Datelike, NaiveDate};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        (date.year(), date.month(), date.day()).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let (y, m, day) = <(i32, u32, u32)>::deserialize(d)?;
        NaiveDate::from_ymd_opt(y, m, day)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date {y}-{m}-{day}")))
    }
}

mod hm {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        (time.hour(), time.minute()).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let (h, m) = <(u32, u32)>::deserialize(d)?;
        NaiveTime::from_hms_opt(h, m, 0)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time {h}:{m}")))
    }
}

/// Display form of the time column, `hh:mm`.
pub fn format_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
