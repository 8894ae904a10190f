//! Timeline ordering for extracted events.
//!
//! Dated events come first in ascending date order; undated events
//! follow in their original order. Both partitions are stable, so events
//! sharing a date keep the order in which they were extracted.

use serde::Serialize;

use crate::extraction::types::Event;

// ── Types ──────────────────────────────────────────────────────────────────

/// Sorted events plus the counts reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub events: Vec<Event>,
    pub dated_events: usize,
    pub undated_events: usize,
    pub total_events: usize,
}

// ── Ordering ───────────────────────────────────────────────────────────────

/// Dated events by ascending date, then undated events.
pub fn sort_events(events: Vec<Event>) -> Vec<Event> {
    let (mut dated, undated): (Vec<Event>, Vec<Event>) =
        events.into_iter().partition(Event::is_dated);

    // `sort_by_key` is stable: equal dates keep encounter order.
    dated.sort_by_key(|e| e.date);
    dated.extend(undated);
    dated
}

/// Sort events and derive the counts from the sorted list.
pub fn build_timeline(events: Vec<Event>) -> Timeline {
    let events = sort_events(events);
    let dated_events = events.iter().filter(|e| e.is_dated()).count();
    let total_events = events.len();

    Timeline {
        events,
        dated_events,
        undated_events: total_events - dated_events,
        total_events,
    }
}
