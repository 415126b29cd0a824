//! Elapsed-time-window policy: worked time up to `now` against the part of
//! the schedule that has already elapsed.

use super::Schedule;
use super::timeline::Timeline;
use crate::utils::time::time_of_day;
use chrono::FixedOffset;

/// Worked seconds up to `now`. Intervals are clipped at `now`; the last
/// open activity runs until `now`.
pub fn actual_seconds(timeline: &Timeline, now: i64) -> i64 {
    let spans = &timeline.spans;
    let mut actual: i64 = 0;

    for (i, span) in spans.iter().enumerate() {
        let next = spans.get(i + 1).map(|s| s.event.timestamp).unwrap_or(now);
        let start = span.event.timestamp;

        if span.marker.is_none() && start < now {
            actual = actual.saturating_add(next.min(now).saturating_sub(start));
        }

        if next > now {
            break;
        }
    }

    actual
}

/// Schedule seconds elapsed by the time-of-day `now_tod`.
pub fn expected_seconds(schedule: &Schedule, now_tod: i64) -> i64 {
    schedule
        .windows
        .iter()
        .filter(|w| w.start < now_tod)
        .map(|w| (w.end.min(now_tod) - w.start).max(0))
        .sum()
}

pub fn delta(timeline: &Timeline, now: i64, schedule: &Schedule, offset: &FixedOffset) -> i64 {
    let expected = expected_seconds(schedule, time_of_day(now, offset));
    actual_seconds(timeline, now).saturating_sub(expected)
}
