//! Sorted view of a daily log: per-event durations and per-label totals.

use crate::models::activity::ActivityEvent;
use crate::models::marker::{Marker, ReservedLabels};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub event: ActivityEvent,
    pub marker: Option<Marker>,
    /// `next.timestamp - timestamp`; 0 for the last event of the day.
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTotal {
    pub label: String,
    pub seconds: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub spans: Vec<Span>,
    /// Non-reserved labels in first-seen order.
    pub per_activity: Vec<LabelTotal>,
    pub total_seconds: i64,
}

impl Timeline {
    pub fn first_with(&self, marker: Marker) -> Option<usize> {
        self.spans.iter().position(|s| s.marker == Some(marker))
    }
}

pub fn build_timeline(events: &[ActivityEvent], labels: &ReservedLabels) -> Timeline {
    if events.is_empty() {
        return Timeline::default();
    }

    // -----------------------------
    // Sort events chronologically (stable: ties keep arrival order)
    // -----------------------------
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let durations: Vec<i64> = sorted
        .windows(2)
        .map(|w| w[1].timestamp - w[0].timestamp)
        .chain(std::iter::once(0))
        .collect();

    let spans: Vec<Span> = sorted
        .into_iter()
        .zip(durations)
        .map(|(event, duration)| Span {
            marker: labels.classify(&event.label),
            event,
            duration,
        })
        .collect();

    // -----------------------------
    // Accumulate by label
    // -----------------------------
    let mut per_activity: Vec<LabelTotal> = Vec::new();
    for span in spans.iter().filter(|s| s.marker.is_none()) {
        match per_activity.iter_mut().find(|t| t.label == span.event.label) {
            Some(t) => t.seconds += span.duration,
            None => per_activity.push(LabelTotal {
                label: span.event.label.clone(),
                seconds: span.duration,
            }),
        }
    }

    let total_seconds = per_activity.iter().map(|t| t.seconds).sum();

    Timeline {
        spans,
        per_activity,
        total_seconds,
    }
}
