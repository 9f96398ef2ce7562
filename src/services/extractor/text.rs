/// Lowercases the utterance and blanks out every character that is not a
/// word character, whitespace, or listed in `keep`.
pub(crate) fn normalize(input: &str, keep: &[char]) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() || keep.contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whole-word containment of a (possibly multi-word) phrase.
pub(crate) fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let words: Vec<&str> = haystack.split_whitespace().collect();
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() || needle.len() > words.len() {
        return false;
    }
    words.windows(needle.len()).any(|w| w == needle.as_slice())
}

pub(crate) const HOUR_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
];

/// Digits or a spoken hour word.
pub(crate) fn parse_hour(token: &str) -> Option<u32> {
    if let Ok(n) = token.parse::<u32>() {
        return Some(n);
    }
    HOUR_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, n)| *n)
}
