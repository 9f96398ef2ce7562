use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static FILLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(um|uh|well|so|like|you know)\b").unwrap());

// Most explicit cue first, bare capitalization last.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:my name is|i'm|i am|this is|call me|name's)\s+([a-zA-Z][a-zA-Z\s]{1,40})",
        r"(?i)\b(?:it's|its)\s+([a-zA-Z][a-zA-Z\s]{1,40})",
        r"(?i)\b(?:i am|im)\s+([a-zA-Z][a-zA-Z\s]{1,40})",
        r"(?i)\b(?:speaking|here|calling)\s*,?\s*([a-zA-Z][a-zA-Z\s]{1,40})",
        r"(?i)([a-zA-Z][a-zA-Z\s]{1,40})\s+(?:speaking|here|calling)",
        r"^([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2})$",
        r"\b([A-Z][a-z]+\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b",
        r"\b([A-Z][a-z]{2,15}(?:\s+[A-Z][a-z]{2,15}){1,2})\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static EXCLUDED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "reservation", "table", "book", "booking", "today", "tomorrow", "yesterday", "dinner",
        "lunch", "breakfast", "restaurant", "want", "need", "like", "would", "could", "should",
        "please", "thank", "thanks", "hello", "hi", "hey", "good", "morning", "afternoon",
        "evening", "night", "time", "date", "day", "week", "month", "year", "people", "person",
        "guest", "party", "special", "request", "dietary", "allergy", "window", "quiet",
        "birthday", "anniversary", "celebration", "vegetarian", "vegan", "gluten", "free",
        "wheelchair", "accessible", "smoking", "non", "available", "check", "confirm", "cancel",
        "change", "modify", "update", "looking", "trying", "wondering", "hoping", "interested",
        "just", "sorry",
    ]
    .into_iter()
    .collect()
});

// A greedy capture runs on past the name ("John Smith and I"); it ends here.
static TRAILING_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "and", "or", "but", "i", "im", "with", "for", "at", "on", "to", "from", "about",
        "calling", "speaking", "here", "we", "my",
    ]
    .into_iter()
    .collect()
});

pub fn extract_name(utterance: &str) -> Option<String> {
    let cleaned = FILLER.replace_all(utterance, "");
    let cleaned = cleaned.trim();

    for (rule, pattern) in NAME_PATTERNS.iter().enumerate() {
        let Some(candidate) = pattern.captures(cleaned).and_then(|c| c.get(1)) else {
            continue;
        };
        if let Some(name) = accept_candidate(candidate.as_str()) {
            tracing::debug!(rule, name = %name, "name extracted");
            return Some(name);
        }
    }

    None
}

fn accept_candidate(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw
        .split_whitespace()
        .take_while(|w| !TRAILING_WORDS.contains(w.to_lowercase().as_str()))
        .collect();

    if words
        .iter()
        .any(|w| EXCLUDED_WORDS.contains(w.to_lowercase().as_str()))
    {
        return None;
    }

    let name = words.join(" ");
    let len = name.chars().count();
    if !(2..=50).contains(&len) || !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(name)
}
