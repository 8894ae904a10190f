use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::normalize::normalize;
use super::types::{Confidence, DateMatch};

/// Which group a pattern belongs to. Decides the match confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    Absolute,
    Relative,
}

impl PatternKind {
    fn confidence(self) -> Confidence {
        match self {
            Self::Absolute => Confidence::High,
            Self::Relative => Confidence::Medium,
        }
    }
}

/// A compiled temporal-expression pattern.
struct DatePattern {
    regex: Regex,
    kind: PatternKind,
}

const FULL_MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";
const SHORT_MONTHS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";
const QUANTITY: &str = "three|two|one|[0-9]+";
const UNITS: &str = "weeks?|days?|months?|years?";

/// Absolute expressions, tried in this order.
static ABSOLUTE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        // "30th August 2025", "15th of August 2025"
        absolute(&format!(
            r"\b[0-9]{{1,2}}(?:st|nd|rd|th)\s+(?:of\s+)?(?:{FULL_MONTHS})\s+[0-9]{{4}}\b"
        )),
        // "August 30, 2025", "August 30 2025"
        absolute(&format!(r"\b(?:{FULL_MONTHS})\s+[0-9]{{1,2}}(?:,\s*|\s+)[0-9]{{4}}\b")),
        // "Aug 30, 2025"
        absolute(&format!(r"\b(?:{SHORT_MONTHS})\s+[0-9]{{1,2}}(?:,\s*|\s+)[0-9]{{4}}\b")),
        // "30 Aug 2025", "30th Aug 2025"
        absolute(&format!(
            r"\b[0-9]{{1,2}}(?:st|nd|rd|th)?\s+(?:{SHORT_MONTHS})\s+[0-9]{{4}}\b"
        )),
        // "08/22/2025", "8-22-25"
        absolute(r"\b[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}\b"),
        // "2025-08-22"
        absolute(r"\b[0-9]{4}[/-][0-9]{1,2}[/-][0-9]{1,2}\b"),
        absolute(r"\btoday\b"),
        absolute(r"\byesterday\b"),
        absolute(r"\btomorrow\b"),
    ]
});

/// Relative expressions, tried after the absolute group.
static RELATIVE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        relative(&format!(r"\b(?:{QUANTITY})\s+(?:{UNITS})\s+ago\b")),
        relative(&format!(
            r"\b(?:{QUANTITY})\s+(?:{UNITS})\s+(?:prior|before|earlier)\b"
        )),
        relative(&format!(r"\b(?:in|after)\s+(?:{QUANTITY})\s+(?:{UNITS})\b")),
        relative(&format!(r"\b(?:{QUANTITY})\s+(?:{UNITS})\s+(?:from now|later)\b")),
        relative(r"\bafter\s+[0-9]+\s+days?\b"),
        relative(r"\b(?:last|next)\s+(?:week|month|year)\b"),
        relative(&format!(r"\bfor\s+the\s+past\s+(?:{QUANTITY})\s+(?:{UNITS})\b")),
    ]
});

fn absolute(pattern: &str) -> DatePattern {
    compile(pattern, PatternKind::Absolute)
}

fn relative(pattern: &str) -> DatePattern {
    compile(pattern, PatternKind::Relative)
}

fn compile(pattern: &str, kind: PatternKind) -> DatePattern {
    DatePattern {
        regex: Regex::new(&format!("(?i){pattern}")).expect("Invalid date pattern regex"),
        kind,
    }
}

/// Scan a sentence against every date pattern and keep the hits that
/// normalize to a calendar date.
///
/// Results are ordered by pattern (absolute group first), then by
/// position. Hits of different patterns over the same text are each
/// kept. Hits that fail to normalize are dropped silently.
pub fn find_date_matches(sentence: &str, reference: NaiveDate) -> Vec<DateMatch> {
    let mut matches = Vec::new();

    for patterns in [&*ABSOLUTE_PATTERNS, &*RELATIVE_PATTERNS] {
        for dp in patterns {
            for hit in dp.regex.find_iter(sentence) {
                match normalize(hit.as_str(), reference) {
                    Ok(date) => matches.push(DateMatch {
                        text: hit.as_str().to_string(),
                        date,
                        confidence: dp.kind.confidence(),
                    }),
                    Err(e) => {
                        tracing::debug!(
                            expression = hit.as_str(),
                            error = %e,
                            "Dropping unresolvable date expression"
                        );
                    }
                }
            }
        }
    }

    matches
}
