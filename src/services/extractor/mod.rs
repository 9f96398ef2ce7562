//! Reservation field extraction from a single transcribed utterance.
//!
//! Each extractor is a pure function over one utterance and returns `None`
//! when nothing matches with confidence. Rules are tried in a fixed order
//! and the first acceptable match wins, so reordering them changes results.

pub mod date;
pub mod guests;
pub mod name;
pub mod text;
pub mod time;

pub use date::extract_date;
pub use guests::extract_guest_count;
pub use name::extract_name;
pub use time::extract_time;

use crate::models::ExtractedFields;

pub fn extract_fields(utterance: &str) -> ExtractedFields {
    ExtractedFields {
        name: extract_name(utterance),
        date: extract_date(utterance),
        time: extract_time(utterance),
        guests: extract_guest_count(utterance),
    }
}
