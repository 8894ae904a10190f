use super::types::EventCategory;

const DISEASE_ONSET_KEYWORDS: &[&str] = &[
    "symptoms", "began", "started", "onset", "developed", "appeared", "worsened", "improved",
    "subsided", "resolved", "fever", "cough", "pain", "headache", "nausea", "fatigue",
    "weakness", "dizzy",
];

const TREATMENT_KEYWORDS: &[&str] = &[
    "medication", "prescribed", "started", "completed", "treatment", "therapy", "surgery",
    "procedure", "dose", "mg", "administered", "antibiotic", "medicine", "drug", "injection",
    "infusion",
];

const APPOINTMENT_KEYWORDS: &[&str] = &[
    "appointment", "visit", "scheduled", "follow-up", "consultation", "test", "exam", "x-ray",
    "scan", "lab", "blood work", "results",
];

const OTHER_OBSERVATION_KEYWORDS: &[&str] = &[
    "observed", "noted", "reports", "presents", "examination", "assessment", "diagnosis",
    "condition", "patient", "clinical",
];

fn keywords(category: EventCategory) -> &'static [&'static str] {
    match category {
        EventCategory::DiseaseOnset => DISEASE_ONSET_KEYWORDS,
        EventCategory::Treatment => TREATMENT_KEYWORDS,
        EventCategory::Appointment => APPOINTMENT_KEYWORDS,
        EventCategory::OtherObservation => OTHER_OBSERVATION_KEYWORDS,
    }
}

/// Keyword hit count per category, in [`EventCategory::ALL`] order.
///
/// A keyword counts once if it occurs anywhere in the sentence as a
/// case-insensitive substring. No stemming; keywords may overlap.
pub fn category_scores(sentence: &str) -> [(EventCategory, usize); 4] {
    let lower = sentence.to_lowercase();
    EventCategory::ALL.map(|category| {
        let score = keywords(category)
            .iter()
            .filter(|keyword| lower.contains(**keyword))
            .count();
        (category, score)
    })
}

/// Pick the highest-scoring category for a sentence.
///
/// Falls back to [`EventCategory::OtherObservation`] when nothing scores.
pub fn categorize(sentence: &str) -> EventCategory {
    let mut best = (EventCategory::OtherObservation, 0);
    for (category, score) in category_scores(sentence) {
        if score > best.1 {
            best = (category, score);
        }
    }
    best.0
}
