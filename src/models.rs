use crate::storage::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const NAME_FIELD: &str = "name";
const ADDRESS_FIELD: &str = "address";
const INVITED_BY_FIELD: &str = "invitedBy";
const CONTACT_FIELD: &str = "contactNumber";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Attendance {
    pub present: bool,
    pub timestamp: Option<String>,
}

/// A visitor document decoded into typed fields.
///
/// In the store the attendance map is flattened into one boolean field per
/// week (`"10"`) and a companion timestamp field (`"10t"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub invited_by: String,
    pub contact_number: String,
    pub attendance: BTreeMap<u32, Attendance>,
}

impl VisitorRecord {
    pub fn from_document(id: &str, doc: &Document) -> Self {
        let text = |field: &str| {
            doc.get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let mut attendance = BTreeMap::new();
        let mut stamps = BTreeMap::new();
        for (key, value) in doc {
            if let Some(week) = parse_week(key) {
                let present = value.as_bool().unwrap_or(false);
                attendance.insert(week, Attendance { present, timestamp: None });
            } else if let Some(week) = timestamp_week(key) {
                if let Some(stamp) = value.as_str().filter(|s| !s.is_empty()) {
                    stamps.insert(week, stamp.to_string());
                }
            }
        }
        for (week, stamp) in stamps {
            if let Some(entry) = attendance.get_mut(&week) {
                entry.timestamp = Some(stamp);
            }
        }

        let name = match text(NAME_FIELD) {
            name if name.is_empty() => id.to_string(),
            name => name,
        };

        Self {
            id: id.to_string(),
            name,
            address: text(ADDRESS_FIELD),
            invited_by: text(INVITED_BY_FIELD),
            contact_number: text(CONTACT_FIELD),
            attendance,
        }
    }

    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(NAME_FIELD.into(), Value::from(self.name.as_str()));
        doc.insert(ADDRESS_FIELD.into(), Value::from(self.address.as_str()));
        doc.insert(INVITED_BY_FIELD.into(), Value::from(self.invited_by.as_str()));
        doc.insert(CONTACT_FIELD.into(), Value::from(self.contact_number.as_str()));
        for (week, entry) in &self.attendance {
            doc.insert(week_key(*week), Value::Bool(entry.present));
            if let Some(stamp) = &entry.timestamp {
                doc.insert(timestamp_key(*week), Value::from(stamp.as_str()));
            }
        }
        doc
    }

    pub fn present_at(&self, week: u32) -> bool {
        self.attendance.get(&week).is_some_and(|entry| entry.present)
    }

    pub fn highest_week(&self) -> Option<u32> {
        self.attendance.keys().next_back().copied()
    }
}

pub fn week_key(week: u32) -> String {
    week.to_string()
}

pub fn timestamp_key(week: u32) -> String {
    format!("{week}t")
}

/// Only the canonical spelling counts, so `"05"` or `"+5"` never alias week 5.
fn parse_week(key: &str) -> Option<u32> {
    key.parse()
        .ok()
        .filter(|week: &u32| week_key(*week) == key)
}

fn timestamp_week(key: &str) -> Option<u32> {
    parse_week(key.strip_suffix('t')?)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewVisitor {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub invited_by: String,
    #[serde(default)]
    pub contact_number: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub week: u32,
    pub present: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorView {
    pub id: String,
    pub name: String,
    pub address: String,
    pub invited_by: String,
    pub contact_number: String,
    pub present: bool,
    pub timestamp: Option<String>,
    pub last_week: Option<u32>,
}

impl VisitorView {
    pub fn project(record: &VisitorRecord, current_week: u32) -> Self {
        let current = record.attendance.get(&current_week);
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            address: record.address.clone(),
            invited_by: record.invited_by.clone(),
            contact_number: record.contact_number.clone(),
            present: current.is_some_and(|entry| entry.present),
            timestamp: current.and_then(|entry| entry.timestamp.clone()),
            last_week: record.highest_week(),
        }
    }
}

/// Everything the page shows, rebuilt in one piece on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub current_week: u32,
    pub recent: Vec<VisitorView>,
    pub older: Vec<VisitorView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekResponse {
    pub week: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MembersResponse {
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn decodes_flat_week_fields() {
        let record = VisitorRecord::from_document(
            "Ana",
            &doc(json!({
                "name": "Ana",
                "address": "12 Hill Rd",
                "invitedBy": "Ben",
                "contactNumber": "555-0101",
                "40": true,
                "40t": "10/4/2026, 9:15:00 AM",
                "41": false,
                "41t": ""
            })),
        );

        assert_eq!(record.invited_by, "Ben");
        assert_eq!(record.contact_number, "555-0101");
        assert_eq!(record.attendance.len(), 2);
        assert_eq!(
            record.attendance[&40],
            Attendance { present: true, timestamp: Some("10/4/2026, 9:15:00 AM".into()) }
        );
        assert_eq!(record.attendance[&41], Attendance { present: false, timestamp: None });
        assert_eq!(record.highest_week(), Some(41));
        assert!(record.present_at(40));
        assert!(!record.present_at(41));
        assert!(!record.present_at(42));
    }

    #[test]
    fn orphan_timestamps_are_not_weeks() {
        let record = VisitorRecord::from_document(
            "Cy",
            &doc(json!({ "name": "Cy", "7t": "1/1/2026, 1:00:00 PM", "note": "x" })),
        );
        assert!(record.attendance.is_empty());
        assert_eq!(record.highest_week(), None);
    }

    #[test]
    fn non_boolean_week_counts_as_absent() {
        let record = VisitorRecord::from_document("Di", &doc(json!({ "3": "yes" })));
        assert_eq!(record.name, "Di");
        assert_eq!(record.address, "");
        assert_eq!(record.highest_week(), Some(3));
        assert!(!record.present_at(3));
    }

    #[test]
    fn only_canonical_week_keys_count() {
        let record = VisitorRecord::from_document(
            "Fay",
            &doc(json!({
                "5": false,
                "05": true,
                "+5": true,
                "05t": "stale",
                "6t": "orphan",
                "+7": true
            })),
        );

        assert_eq!(record.attendance.len(), 1);
        assert_eq!(record.attendance[&5], Attendance { present: false, timestamp: None });
        assert_eq!(record.highest_week(), Some(5));
        assert_eq!(parse_week("0"), Some(0));
        assert_eq!(parse_week("007"), None);
        assert_eq!(timestamp_week("12t"), Some(12));
        assert_eq!(timestamp_week("012t"), None);
    }

    #[test]
    fn responses_use_camel_case() {
        let mut record = VisitorRecord {
            id: "Gus".into(),
            name: "Gus".into(),
            invited_by: "Ana".into(),
            contact_number: "555-0199".into(),
            ..Default::default()
        };
        record.attendance.insert(8, Attendance { present: true, timestamp: None });

        let view = ViewState {
            current_week: 8,
            recent: vec![VisitorView::project(&record, 8)],
            older: Vec::new(),
        };
        let encoded = serde_json::to_value(&view).unwrap();
        assert_eq!(encoded["currentWeek"], json!(8));
        assert_eq!(encoded["recent"][0]["invitedBy"], json!("Ana"));
        assert_eq!(encoded["recent"][0]["contactNumber"], json!("555-0199"));
        assert_eq!(encoded["recent"][0]["lastWeek"], json!(8));

        let encoded = serde_json::to_value(&record).unwrap();
        assert_eq!(encoded["invitedBy"], json!("Ana"));
        assert!(encoded.get("invited_by").is_none());
    }

    #[test]
    fn document_keeps_flat_layout() {
        let mut record = VisitorRecord {
            id: "Ed".into(),
            name: "Ed".into(),
            ..Default::default()
        };
        record.attendance.insert(9, Attendance { present: true, timestamp: None });
        record
            .attendance
            .insert(12, Attendance { present: true, timestamp: Some("stamp".into()) });

        let encoded = record.to_document();
        assert_eq!(encoded.get("9"), Some(&Value::Bool(true)));
        assert!(!encoded.contains_key("9t"));
        assert_eq!(encoded.get("12t"), Some(&Value::from("stamp")));
        assert_eq!(encoded.get("invitedBy"), Some(&Value::from("")));
        assert_eq!(VisitorRecord::from_document("Ed", &encoded), record);
    }
}
