//! Record Form
//!
//! Raw values typed into the add/edit modal and their validation into a
//! `RecordDraft`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::entity::{SyncError, SyncResult};
use super::record::{Record, RecordDraft};

/// Untyped form values, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    pub name: String,
    pub reviews: String,
    pub start_date: String,
    pub picture: String,
}

impl RecordForm {
    /// Pre-fill the form with an existing record for editing
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            reviews: record.reviews.to_string(),
            start_date: record.start_date_text(),
            picture: record.picture.clone(),
        }
    }

    /// Check required fields and types, producing the request body
    pub fn validate(&self) -> SyncResult<RecordDraft> {
        let name = required(&self.name, "name")?;
        let reviews = required(&self.reviews, "reviews")?;
        let start_date = required(&self.start_date, "start date")?;
        let picture = required(&self.picture, "picture URL")?;

        Ok(RecordDraft {
            name: name.to_string(),
            reviews: parse_reviews(reviews)?,
            start_date: normalize_start_date(start_date)?,
            picture: parse_picture(picture)?,
        })
    }
}

fn required<'a>(value: &'a str, label: &str) -> SyncResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(SyncError::Validation(format!("Please enter {}", label)))
    } else {
        Ok(trimmed)
    }
}

fn parse_reviews(raw: &str) -> SyncResult<u32> {
    if let Ok(n) = raw.parse::<u32>() {
        return Ok(n);
    }
    // Number inputs may hand over "12.0" or "1e2"
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => Ok(n as u32),
        _ => Err(SyncError::Validation("Reviews must be a number".to_string())),
    }
}

fn parse_picture(raw: &str) -> SyncResult<String> {
    match url::Url::parse(raw) {
        Ok(parsed) if parsed.has_host() => Ok(raw.to_string()),
        _ => Err(SyncError::Validation("Please enter picture URL".to_string())),
    }
}

/// Parse a start date from the formats the form and the endpoint produce.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Timestamps keep their own calendar date.
pub fn normalize_start_date(raw: &str) -> SyncResult<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    Err(SyncError::Validation("Start date must be a date".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, reviews: &str, start_date: &str, picture: &str) -> RecordForm {
        RecordForm {
            name: name.into(),
            reviews: reviews.into(),
            start_date: start_date.into(),
            picture: picture.into(),
        }
    }

    #[test]
    fn test_valid_form_produces_draft() {
        let draft = form(" Lakeside ", "42", "2024-02-29", "https://img.example.com/1.png")
            .validate()
            .expect("valid form");
        assert_eq!(draft.name, "Lakeside");
        assert_eq!(draft.reviews, 42);
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_non_numeric_reviews_rejected() {
        let err = form("a", "lots", "2024-01-01", "https://x.io").validate().unwrap_err();
        assert_eq!(err, SyncError::Validation("Reviews must be a number".into()));
    }

    #[test]
    fn test_negative_and_fractional_reviews_rejected() {
        assert!(form("a", "-1", "2024-01-01", "https://x.io").validate().is_err());
        assert!(form("a", "2.5", "2024-01-01", "https://x.io").validate().is_err());
        assert_eq!(form("a", "3.0", "2024-01-01", "https://x.io").validate().unwrap().reviews, 3);
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let err = RecordForm::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter name");

        let err = form("a", "1", "  ", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter start date");
    }

    #[test]
    fn test_picture_must_be_absolute_url() {
        let err = form("a", "1", "2024-01-01", "not a url").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter picture URL");
    }

    #[test]
    fn test_start_date_normalization() {
        let expected = NaiveDate::from_ymd_opt(2023, 7, 9).unwrap();
        assert_eq!(normalize_start_date("2023-07-09").unwrap(), expected);
        assert_eq!(normalize_start_date("2023/07/09").unwrap(), expected);
        assert_eq!(normalize_start_date("2023-07-09T00:00:00.000Z").unwrap(), expected);
        assert_eq!(normalize_start_date("2023-07-09T18:30:00+02:00").unwrap(), expected);
        assert_eq!(normalize_start_date("2023-07-09T08:15:00").unwrap(), expected);
        assert!(normalize_start_date("09.07.2023").is_err());
    }

    #[test]
    fn test_from_record_round_trips_through_validate() {
        let record = Record {
            id: 5,
            name: "Pier".into(),
            reviews: 8,
            start_date: NaiveDate::from_ymd_opt(2022, 3, 4).unwrap(),
            picture: "https://example.com/pier.jpg".into(),
        };
        let draft = RecordForm::from_record(&record).validate().unwrap();
        assert_eq!(Record::from_draft(5, draft), record);
    }
}
