//! Record Entity
//!
//! The single row type served by the data endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;
use super::form::normalize_start_date;

/// Server-assigned record identifier
pub type RecordId = u64;

/// A row of the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, assigned by the endpoint on create
    pub id: RecordId,
    pub name: String,
    pub reviews: u32,
    /// Sent as `YYYY-MM-DD`; full timestamps are accepted on read
    #[serde(deserialize_with = "deserialize_start_date")]
    pub start_date: NaiveDate,
    pub picture: String,
}

impl Entity for Record {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record {
    pub fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            name: draft.name,
            reviews: draft.reviews,
            start_date: draft.start_date,
            picture: draft.picture,
        }
    }

    /// Start date as it is displayed and transmitted
    pub fn start_date_text(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }
}

/// Validated record fields without an id (create and update body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub reviews: u32,
    #[serde(deserialize_with = "deserialize_start_date")]
    pub start_date: NaiveDate,
    pub picture: String,
}

fn deserialize_start_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    normalize_start_date(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_round_trips_plain_date() {
        let value = json!({
            "id": 7,
            "name": "Harbor View",
            "reviews": 12,
            "start_date": "2023-04-01",
            "picture": "https://example.com/a.png"
        });
        let record: Record = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(record.start_date, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn test_record_accepts_timestamp_start_date() {
        let record: Record = serde_json::from_value(json!({
            "id": 1,
            "name": "a",
            "reviews": 0,
            "start_date": "2021-12-31T00:00:00.000Z",
            "picture": "https://example.com"
        }))
        .unwrap();
        assert_eq!(record.start_date_text(), "2021-12-31");
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = RecordDraft {
            name: "n".into(),
            reviews: 3,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            picture: "https://example.com/p.jpg".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["start_date"], "2020-01-02");
    }
}
