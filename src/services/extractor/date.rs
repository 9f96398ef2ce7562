use once_cell::sync::Lazy;
use regex::Regex;

use super::text::normalize;

static RELATIVE_DATES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\b(today|now)\b", "Today"),
        (r"\b(tomorrow|tmrw)\b", "Tomorrow"),
        (r"\b(day after tomorrow|overmorrow)\b", "Day After Tomorrow"),
        (r"\bnext week\b", "Next Week"),
        (r"\bthis week\b", "This Week"),
    ]
    .into_iter()
    .map(|(p, label)| (Regex::new(p).unwrap(), label))
    .collect()
});

const WEEKDAYS: &[(&str, &[&str])] = &[
    ("Sunday", &["sunday", "sun"]),
    ("Monday", &["monday", "mon"]),
    ("Tuesday", &["tuesday", "tue", "tues"]),
    ("Wednesday", &["wednesday", "wed"]),
    ("Thursday", &["thursday", "thu", "thur", "thurs"]),
    ("Friday", &["friday", "fri"]),
    ("Saturday", &["saturday", "sat"]),
];

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec";

// Month-name forms run before the bare ordinal, which would otherwise
// shadow them ("march 5th" -> "5th").
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b\d{1,2}[/\-]\d{1,2}(?:[/\-]\d{2,4})?\b").unwrap(),
        Regex::new(&format!(r"\b(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?\b")).unwrap(),
        Regex::new(&format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})\b")).unwrap(),
        Regex::new(r"\b\d{1,2}(?:st|nd|rd|th)\b").unwrap(),
    ]
});

pub fn extract_date(utterance: &str) -> Option<String> {
    let cleaned = normalize(utterance, &['/', '-']);

    for (pattern, label) in RELATIVE_DATES.iter() {
        if pattern.is_match(&cleaned) {
            return Some(label.to_string());
        }
    }

    // Substring match on purpose: catches "wed" in "wednesday's fine" and "thurs."
    for (day, variants) in WEEKDAYS {
        if variants.iter().any(|v| cleaned.contains(v)) {
            return Some(day.to_string());
        }
    }

    DATE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(&cleaned))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_keywords() {
        assert_eq!(extract_date("can we come tomorrow"), Some("Tomorrow".to_string()));
        assert_eq!(extract_date("tonight, right now"), Some("Today".to_string()));
        assert_eq!(extract_date("sometime next week"), Some("Next Week".to_string()));
    }

    #[test]
    fn test_tomorrow_outranks_day_after_tomorrow() {
        assert_eq!(
            extract_date("the day after tomorrow"),
            Some("Tomorrow".to_string())
        );
        assert_eq!(
            extract_date("overmorrow works"),
            Some("Day After Tomorrow".to_string())
        );
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(
            extract_date("let's say next wednesday"),
            Some("Wednesday".to_string())
        );
        assert_eq!(extract_date("this Saturday?"), Some("Saturday".to_string()));
        assert_eq!(extract_date("thurs at 8"), Some("Thursday".to_string()));
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(extract_date("on 12/25 please"), Some("12/25".to_string()));
        assert_eq!(extract_date("3-14-2025"), Some("3-14-2025".to_string()));
    }

    #[test]
    fn test_month_name_dates() {
        assert_eq!(extract_date("march 5th"), Some("march 5th".to_string()));
        assert_eq!(extract_date("on 5 June"), Some("5 june".to_string()));
        assert_eq!(extract_date("December 24"), Some("december 24".to_string()));
    }

    #[test]
    fn test_bare_ordinal() {
        assert_eq!(extract_date("for the 14th"), Some("14th".to_string()));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date("asdkjasdlkj"), None);
        assert_eq!(extract_date("a table for four"), None);
    }
}
