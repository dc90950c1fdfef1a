use crate::models::{timestamp_key, week_key, AttendanceUpdate, VisitorRecord};
use crate::storage::Document;
use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;
use std::fmt::Display;

/// Flips presence for `week`, stamping the time when the visitor becomes present.
///
/// `record` must be the freshly read stored value, otherwise a concurrent
/// toggle is silently undone.
pub fn toggle_attendance(record: &VisitorRecord, week: u32, stamp: &str) -> AttendanceUpdate {
    let present = !record.present_at(week);
    AttendanceUpdate {
        week,
        present,
        timestamp: if present { stamp.to_string() } else { String::new() },
    }
}

impl AttendanceUpdate {
    pub fn to_patch(&self) -> Document {
        let mut patch = Document::new();
        patch.insert(week_key(self.week), Value::Bool(self.present));
        patch.insert(timestamp_key(self.week), Value::from(self.timestamp.as_str()));
        patch
    }
}

pub fn now_label() -> String {
    timestamp_label(&Local::now())
}

/// Human-readable stamp such as `10/18/2026, 3:04:05 PM`.
pub fn timestamp_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
