use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<u8>,
}

impl ExtractedFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.time.is_none() && self.guests.is_none()
    }
}
