//! Checkpoint-alignment policy: compare four landmark events of the day
//! with fixed reference clock times.

use super::Schedule;
use super::timeline::Timeline;
use crate::models::marker::Marker;
use crate::utils::time::time_of_day;
use chrono::FixedOffset;

pub const CHECKPOINT_COUNT: usize = 4;

/// Timestamps of: first event, break start, first event after the break,
/// day end. Missing ones are `None`.
pub fn checkpoints(timeline: &Timeline) -> [Option<i64>; CHECKPOINT_COUNT] {
    let ts = |i: usize| timeline.spans.get(i).map(|s| s.event.timestamp);

    let break_idx = timeline.first_with(Marker::Break);

    [
        ts(0),
        break_idx.and_then(ts),
        break_idx.and_then(|i| ts(i + 1)),
        timeline.first_with(Marker::DayEnd).and_then(ts),
    ]
}

/// Even positions (arrivals) count `reference - actual`, odd positions
/// (departures) count `actual - reference`.
pub fn delta(timeline: &Timeline, schedule: &Schedule, offset: &FixedOffset) -> i64 {
    checkpoints(timeline)
        .iter()
        .zip(schedule.checkpoints.iter())
        .enumerate()
        .filter_map(|(k, (actual, reference))| {
            let actual = time_of_day((*actual)?, offset);
            Some(if k % 2 == 0 {
                reference - actual
            } else {
                actual - reference
            })
        })
        .sum()
}
