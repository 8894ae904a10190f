pub mod types;
pub mod segment;
pub mod normalize;
pub mod patterns;
pub mod categorize;
pub mod assemble;
pub mod reference;
pub mod orchestrator;
pub mod sample;

pub use orchestrator::{analyze_text, TimelineExtractor};
pub use types::{Confidence, DateMatch, Event, EventCategory, ExtractionError, NormalizationError};
