use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// `date_text` carried by events whose sentence yielded no usable date.
pub const DATE_NOT_SPECIFIED: &str = "Date not specified";

// ═══════════════════════════════════════════════════════════
// Output records
// ═══════════════════════════════════════════════════════════

/// One medical event extracted from a clinical note.
///
/// Built once per (sentence, date match) pair, or once per undated
/// sentence that carries medical content. Never merged or re-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// The source sentence, unmodified.
    pub original_text: String,
    /// Resolved calendar date, serialized as `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    /// The literal matched expression, or [`DATE_NOT_SPECIFIED`].
    pub date_text: String,
    /// Sentence with the date expression cut out.
    pub event_description: String,
    pub category: EventCategory,
    pub confidence: Confidence,
}

impl Event {
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}

/// A temporal expression found in a sentence that normalized to a date.
///
/// Candidates whose normalization fails are dropped before a
/// `DateMatch` is built, so the date is always present here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Matched literal, exactly as it appears in the sentence.
    pub text: String,
    pub date: NaiveDate,
    pub confidence: Confidence,
}

/// Coarse reliability label for an event's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Absolute expression ("August 22, 2025", "today").
    High,
    /// Relative expression ("three weeks ago", "next month").
    Medium,
    /// No date found; the sentence was kept for its medical content.
    Low,
}

/// The four fixed event categories, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventCategory {
    #[serde(rename = "Disease Onset/Progression")]
    DiseaseOnset,
    #[serde(rename = "Treatment")]
    Treatment,
    #[serde(rename = "Appointment/Scheduling")]
    Appointment,
    #[serde(rename = "Other Clinical Observations")]
    OtherObservation,
}

impl EventCategory {
    /// Enumeration order. Ties in keyword scoring go to the earliest entry.
    pub const ALL: [EventCategory; 4] = [
        Self::DiseaseOnset,
        Self::Treatment,
        Self::Appointment,
        Self::OtherObservation,
    ];
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

/// Why a matched temporal expression could not become a calendar date.
///
/// The matcher treats every variant the same way (the candidate is
/// dropped); the distinction exists for logging and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("No recognised date format in '{0}'")]
    UnrecognisedFormat(String),

    #[error("Unknown month name '{0}'")]
    UnknownMonth(String),

    #[error("Date out of range: year {year}, month {month}, day {day}")]
    OutOfRange { year: i32, month: u32, day: u32 },

    #[error("Date arithmetic overflow for '{0}'")]
    Overflow(String),
}

/// Request-level extraction failures surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Please provide medical text to analyze")]
    EmptyInput,
}
