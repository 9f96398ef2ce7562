use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ExtractedFields;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub confirmation: String,
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<u8>,
    pub phone: Option<String>,
    pub special_requests: Option<String>,
    pub transcript: Option<String>,
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub created_at: NaiveDateTime,
}

/// Create payload. Any field the client sends without a dedicated column
/// lands in `extra` and is stored alongside the reservation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReservation {
    pub confirmation: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<u8>,
    pub phone: Option<String>,
    pub special_requests: Option<String>,
    pub transcript: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NewReservation {
    /// Fills only the fields the client left empty.
    pub fn fill_missing(&mut self, fields: &ExtractedFields) {
        if self.name.is_none() {
            self.name = fields.name.clone();
        }
        if self.date.is_none() {
            self.date = fields.date.clone();
        }
        if self.time.is_none() {
            self.time = fields.time.clone();
        }
        if self.guests.is_none() {
            self.guests = fields.guests;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_missing_keeps_client_values() {
        let mut new = NewReservation {
            name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        };
        let fields = ExtractedFields {
            name: Some("Someone Else".to_string()),
            date: Some("Friday".to_string()),
            time: Some("7:00 PM".to_string()),
            guests: Some(4),
        };

        new.fill_missing(&fields);

        assert_eq!(new.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(new.date.as_deref(), Some("Friday"));
        assert_eq!(new.time.as_deref(), Some("7:00 PM"));
        assert_eq!(new.guests, Some(4));
    }

    #[test]
    fn test_unknown_fields_land_in_extra() {
        let json = r#"{"name":"Ada","guests":2,"occasion":"anniversary","seating":{"window":true}}"#;
        let new: NewReservation = serde_json::from_str(json).unwrap();
        assert_eq!(new.name.as_deref(), Some("Ada"));
        assert_eq!(new.guests, Some(2));
        assert_eq!(new.extra["occasion"], "anniversary");
        assert_eq!(new.extra["seating"]["window"], true);
        assert!(!new.extra.contains_key("name"));
    }
}
