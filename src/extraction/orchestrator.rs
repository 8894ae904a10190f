//! Extraction entry point: text + reference instant → events.
//!
//! Each call is self-contained. The only inputs are the note text and
//! the reference date; pattern and keyword tables are static, so
//! extractors can run concurrently without coordination.

use chrono::{NaiveDate, NaiveDateTime};

use super::assemble::assemble_sentence_events;
use super::patterns::find_date_matches;
use super::segment::split_sentences;
use super::types::{Event, ExtractionError};
use crate::timeline::{build_timeline, Timeline};

/// Rule-based medical event extractor bound to one reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineExtractor {
    reference_date: NaiveDate,
}

impl TimelineExtractor {
    /// Create an extractor resolving relative dates against `reference`.
    pub fn new(reference: NaiveDateTime) -> Self {
        Self::with_reference_date(reference.date())
    }

    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Extract events in encounter order (sentence by sentence, then
    /// match order within a sentence). Not yet sorted.
    pub fn extract(&self, text: &str) -> Vec<Event> {
        let sentences = split_sentences(text);
        let mut events = Vec::new();

        for sentence in &sentences {
            let matches = find_date_matches(sentence, self.reference_date);
            events.extend(assemble_sentence_events(sentence, matches));
        }

        tracing::debug!(
            sentences = sentences.len(),
            events = events.len(),
            reference = %self.reference_date,
            "Extracted events from note"
        );

        events
    }
}

/// Validate, extract and sort in one call.
///
/// Rejects empty or whitespace-only text before any processing.
pub fn analyze_text(text: &str, reference: NaiveDateTime) -> Result<Timeline, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyInput);
    }

    let events = TimelineExtractor::new(reference).extract(text);
    let timeline = build_timeline(events);

    tracing::info!(
        chars = text.len(),
        dated = timeline.dated_events,
        undated = timeline.undated_events,
        "Timeline analysis complete"
    );

    Ok(timeline)
}
