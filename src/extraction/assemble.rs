use super::categorize::categorize;
use super::types::{Confidence, DateMatch, Event, DATE_NOT_SPECIFIED};

/// Words that make an undated sentence worth keeping.
const MEDICAL_INDICATORS: [&str; 11] = [
    "patient",
    "symptoms",
    "diagnosis",
    "treatment",
    "medication",
    "test",
    "exam",
    "results",
    "appointment",
    "visit",
    "prescribed",
];

pub fn has_medical_content(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    MEDICAL_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}

/// Remove the first occurrence of `date_text` and collapse whitespace.
/// Falls back to the whole sentence when nothing is left.
pub fn clean_event_description(sentence: &str, date_text: &str) -> String {
    let removed = sentence.replacen(date_text, "", 1);
    let cleaned = removed.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        sentence.to_string()
    } else {
        cleaned
    }
}

/// Turn one sentence and its resolved date matches into events.
///
/// One event per match; a sentence without matches yields a single
/// low-confidence undated event if it has medical content, otherwise
/// nothing. The category is computed once and shared.
pub fn assemble_sentence_events(sentence: &str, matches: Vec<DateMatch>) -> Vec<Event> {
    if matches.is_empty() {
        if !has_medical_content(sentence) {
            return Vec::new();
        }
        return vec![Event {
            original_text: sentence.to_string(),
            date: None,
            date_text: DATE_NOT_SPECIFIED.to_string(),
            event_description: sentence.to_string(),
            category: categorize(sentence),
            confidence: Confidence::Low,
        }];
    }

    let category = categorize(sentence);
    matches
        .into_iter()
        .map(|m| Event {
            original_text: sentence.to_string(),
            date: Some(m.date),
            event_description: clean_event_description(sentence, &m.text),
            date_text: m.text,
            category,
            confidence: m.confidence,
        })
        .collect()
}
