use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::text::{contains_phrase, normalize, parse_hour};

const HOUR: &str = r"(\d{1,2}|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.chars().next() {
            Some('a') => Some(Meridiem::Am),
            Some('p') => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// A validated 12-hour clock time. Renders as `H:MM AM|PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl ClockTime {
    /// Out-of-range values yield `None`. A missing meridiem means evening:
    /// a bare hour on a dinner booking line is a PM hour, 12 included.
    pub fn new(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> Option<Self> {
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            meridiem: meridiem.unwrap_or(Meridiem::Pm),
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem.as_str())
    }
}

type Normalizer = fn(&Captures<'_>) -> Option<ClockTime>;

struct TimeRule {
    name: &'static str,
    pattern: Regex,
    normalize: Normalizer,
}

fn hour_at(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| parse_hour(m.as_str()))
}

fn minute_at(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn meridiem_at(caps: &Captures<'_>, group: usize) -> Option<Meridiem> {
    caps.get(group).and_then(|m| Meridiem::parse(m.as_str()))
}

static TIME_RULES: Lazy<Vec<TimeRule>> = Lazy::new(|| {
    let rule = |name, pattern: &str, normalize: Normalizer| TimeRule {
        name,
        pattern: Regex::new(pattern).unwrap(),
        normalize,
    };

    vec![
        rule("hh:mm meridiem", r"\b(\d{1,2}):(\d{2})\s*([ap])\s?m\b", |c| {
            ClockTime::new(hour_at(c, 1)?, minute_at(c, 2)?, meridiem_at(c, 3))
        }),
        rule("hh meridiem", r"\b(\d{1,2})\s*([ap])\s?m\b", |c| {
            ClockTime::new(hour_at(c, 1)?, 0, meridiem_at(c, 2))
        }),
        rule("hh:mm", r"\b(\d{1,2}):(\d{2})\b", |c| {
            ClockTime::new(hour_at(c, 1)?, minute_at(c, 2)?, None)
        }),
        rule("noon/midnight", r"\b(noon|midday|midnight)\b", |c| match &c[1] {
            "midnight" => ClockTime::new(12, 0, Some(Meridiem::Am)),
            _ => ClockTime::new(12, 0, Some(Meridiem::Pm)),
        }),
        rule("half past", &format!(r"\b(?:half|thirty)[\s-]+past[\s-]+{HOUR}\b"), |c| {
            ClockTime::new(hour_at(c, 1)?, 30, None)
        }),
        rule("hh thirty", &format!(r"\b{HOUR}[\s-]+(?:thirty|half)\b"), |c| {
            ClockTime::new(hour_at(c, 1)?, 30, None)
        }),
        rule("quarter past", &format!(r"\b(?:quarter|fifteen)[\s-]+past[\s-]+{HOUR}\b"), |c| {
            ClockTime::new(hour_at(c, 1)?, 15, None)
        }),
        rule("hh fifteen", &format!(r"\b{HOUR}[\s-]+(?:fifteen|quarter)\b"), |c| {
            ClockTime::new(hour_at(c, 1)?, 15, None)
        }),
        rule("o'clock", &format!(r"\b{HOUR}\s*(?:o\s?clock|clock)\b"), |c| {
            ClockTime::new(hour_at(c, 1)?, 0, None)
        }),
        // Group 2 catches a head count ("about 10 people") or a date ("at 12/25").
        rule(
            "at hh",
            r"\b(?:at|around|about|by)\s+(\d{1,2})\b([/-]\d|\s*(?:people|persons|person|guests|guest|ppl|of us)\b)?",
            |c| match c.get(2) {
                Some(_) => None,
                None => ClockTime::new(hour_at(c, 1)?, 0, None),
            },
        ),
    ]
});

// Whole-word matches, most specific phrase first: "early evening" is not
// "evening" and "listen" is not "ten".
const SPOKEN_TIMES: &[(&str, &str)] = &[
    ("early evening", "6:00 PM"),
    ("late evening", "8:00 PM"),
    ("dinner time", "7:00 PM"),
    ("evening", "7:00 PM"),
    ("five thirty", "5:30 PM"),
    ("six thirty", "6:30 PM"),
    ("seven thirty", "7:30 PM"),
    ("eight thirty", "8:30 PM"),
    ("nine thirty", "9:30 PM"),
    ("ten thirty", "10:30 PM"),
    ("eleven thirty", "11:30 PM"),
    ("five", "5:00 PM"),
    ("six", "6:00 PM"),
    ("seven", "7:00 PM"),
    ("eight", "8:00 PM"),
    ("nine", "9:00 PM"),
    ("ten", "10:00 PM"),
    ("eleven", "11:00 PM"),
];

pub fn extract_time(utterance: &str) -> Option<String> {
    let cleaned = normalize(utterance, &[':', '/', '-']);

    for rule in TIME_RULES.iter() {
        // An out-of-range or rejected match counts as no match; keep scanning.
        let found = rule
            .pattern
            .captures_iter(&cleaned)
            .find_map(|caps| (rule.normalize)(&caps));
        if let Some(time) = found {
            tracing::debug!(rule = rule.name, time = %time, "time extracted");
            return Some(time.to_string());
        }
    }

    let cleaned = cleaned.replace(|c: char| c == '/' || c == '-', " ");
    SPOKEN_TIMES
        .iter()
        .find(|(phrase, _)| contains_phrase(&cleaned, phrase))
        .map(|(_, time)| time.to_string())
}
