use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::text::normalize;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 20;

static COMPOUND_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety)\s+(one|two|three|four|five|six|seven|eight|nine)\b",
    )
    .unwrap()
});

static COUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(\d+)\s*(?:people|person|persons|guest|guests|ppl)\b",
        r"(?:table for|party of|group of|reservation for)\s*(\d+)",
        r"(\d+)\s*(?:of us|in our party|in our group)",
        r"\b(\d+)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// The article "a" sits last: it appears in most sentences, so any real
// number word has to win over it.
const WORD_NUMBERS: &[(&str, u8)] = &[
    ("one", 1),
    ("single", 1),
    ("solo", 1),
    ("two", 2),
    ("couple", 2),
    ("pair", 2),
    ("both", 2),
    ("three", 3),
    ("trio", 3),
    ("four", 4),
    ("quad", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("dozen", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("a", 1),
];

static CUE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "people", "person", "persons", "guest", "guests", "party", "table", "us", "group",
    ]
    .into_iter()
    .collect()
});

fn tens_value(word: &str) -> u32 {
    match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        _ => 90,
    }
}

fn units_value(word: &str) -> u32 {
    WORD_NUMBERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| u32::from(*n))
        .unwrap_or(0)
}

/// "twenty five" -> "25", so spoken compounds go through the numeric rules.
fn fold_compound_numbers(text: &str) -> String {
    COMPOUND_NUMBER
        .replace_all(text, |caps: &Captures<'_>| {
            (tens_value(&caps[1]) + units_value(&caps[2])).to_string()
        })
        .into_owned()
}

pub fn extract_guest_count(utterance: &str) -> Option<u8> {
    let cleaned = fold_compound_numbers(&normalize(utterance, &[]));

    let mut numeric_seen = false;
    for pattern in COUNT_PATTERNS.iter() {
        let Some(m) = pattern.captures(&cleaned).and_then(|c| c.get(1)) else {
            continue;
        };
        numeric_seen = true;
        match m.as_str().parse::<u8>() {
            Ok(n) if (MIN_GUESTS..=MAX_GUESTS).contains(&n) => return Some(n),
            _ => tracing::debug!(value = m.as_str(), "guest count out of range"),
        }
    }

    // A numeric mention that failed the range check is final; number words
    // elsewhere in the sentence are not consulted.
    if numeric_seen {
        return None;
    }

    let words: HashSet<&str> = cleaned.split_whitespace().collect();
    let has_cue = words.iter().any(|w| CUE_WORDS.contains(*w));

    WORD_NUMBERS
        .iter()
        .filter(|(word, _)| words.contains(*word))
        .find(|(_, n)| has_cue || *n <= 2)
        .map(|(_, n)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_with_context() {
        assert_eq!(extract_guest_count("table for 4"), Some(4));
        assert_eq!(extract_guest_count("we'll be 6 people"), Some(6));
        assert_eq!(extract_guest_count("there are 3 of us"), Some(3));
        assert_eq!(extract_guest_count("just 2"), Some(2));
    }

    #[test]
    fn test_word_numbers() {
        assert_eq!(extract_guest_count("party of two"), Some(2));
        assert_eq!(extract_guest_count("a table for two"), Some(2));
        assert_eq!(extract_guest_count("five of us"), Some(5));
        assert_eq!(extract_guest_count("a dozen guests"), Some(12));
        assert_eq!(extract_guest_count("just a couple"), Some(2));
    }

    #[test]
    fn test_large_word_number_needs_context() {
        assert_eq!(extract_guest_count("three"), None);
        assert_eq!(extract_guest_count("two please"), Some(2));
    }

    #[test]
    fn test_out_of_range_suppresses_word_fallback() {
        assert_eq!(extract_guest_count("a table for twenty five"), None);
        assert_eq!(extract_guest_count("table for 30 people"), None);
        assert_eq!(extract_guest_count("0 guests, maybe two"), None);
    }

    #[test]
    fn test_no_count() {
        assert_eq!(extract_guest_count("just me"), None);
        assert_eq!(extract_guest_count("asdkjasdlkj"), None);
        assert_eq!(extract_guest_count(""), None);
    }

    #[test]
    fn test_fold_compound_numbers() {
        assert_eq!(fold_compound_numbers("twenty five of us"), "25 of us");
        assert_eq!(fold_compound_numbers("twenty"), "twenty");
    }
}
