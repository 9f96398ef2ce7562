use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExtractedFields;
use crate::services::extractor::guests::{MAX_GUESTS, MIN_GUESTS};

// Generated replies are well-formed prose, so one loose pattern per field
// is enough; user utterances go through the full extractor instead.
static NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:name is|i am|i'm|this is|call me)\s+([a-z][a-z\s]{1,30})").unwrap()
});
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:on|for|date)\s+([a-z0-9 ,]+)").unwrap());
static TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:at|time)\s+([0-9:apm ]+)").unwrap());
static GUESTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:for|party of|table for)\s+(\d+)").unwrap());

fn first_group(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn extract_completion_details(text: &str) -> ExtractedFields {
    ExtractedFields {
        name: first_group(&NAME, text),
        date: first_group(&DATE, text),
        time: first_group(&TIME, text),
        guests: first_group(&GUESTS, text)
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (MIN_GUESTS..=MAX_GUESTS).contains(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_with_all_fields() {
        let reply = "Sure! Your name is Maria Lopez. Booked a table for 4 on Friday, at 7:30 pm";
        let details = extract_completion_details(reply);
        assert_eq!(details.name.as_deref(), Some("Maria Lopez"));
        assert_eq!(details.guests, Some(4));
        assert_eq!(details.time.as_deref(), Some("7:30 pm"));
    }

    #[test]
    fn test_empty_reply() {
        assert!(extract_completion_details("").is_empty());
    }

    #[test]
    fn test_guest_count_range() {
        let details = extract_completion_details("a party of 40");
        assert_eq!(details.guests, None);
    }
}
