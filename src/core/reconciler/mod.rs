//! Daily activity reconciler.
//!
//! Pure function of `(events, now, schedule)`: sorts a day's log, sums the
//! time spent per label and computes a signed delta against the expected
//! schedule using exactly one [`Policy`].

pub mod checkpoint;
pub mod elapsed;
pub mod timeline;

use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityEvent;
use crate::models::marker::ReservedLabels;
use crate::models::report::{ActivityTime, DailyReport};
use crate::utils::{format_delta, format_duration};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use timeline::{LabelTotal, build_timeline};

pub const MISSING_NOW: &str = "You must valorize the \"now\" key";

/// How the delta against the schedule is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Worked time up to `now` minus the elapsed part of the schedule.
    #[default]
    Elapsed,
    /// Signed distance of four landmark events from reference clock times.
    Checkpoint,
}

impl Policy {
    pub fn requires_now(&self) -> bool {
        matches!(self, Policy::Elapsed)
    }
}

/// Time-of-day window, seconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub windows: Vec<Window>,
    /// Reference clock times for arrival, break start, break end, day end.
    pub checkpoints: Vec<i64>,
}

impl Default for Schedule {
    fn default() -> Self {
        const H: i64 = 3600;
        Self {
            windows: vec![
                Window { start: 9 * H, end: 13 * H },
                Window { start: 14 * H, end: 18 * H },
            ],
            checkpoints: vec![8 * H + 45 * 60, 13 * H, 14 * H + 15 * 60, 18 * H],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub per_activity: Vec<LabelTotal>,
    pub total_seconds: i64,
    pub delta_seconds: i64,
}

impl Reconciliation {
    pub fn to_report(&self) -> DailyReport {
        DailyReport {
            body: self
                .per_activity
                .iter()
                .map(|a| ActivityTime {
                    activity: a.label.clone(),
                    time: format_duration(a.seconds),
                })
                .collect(),
            total: format_duration(self.total_seconds),
            delta: format_delta(self.delta_seconds),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reconciler {
    pub policy: Policy,
    pub schedule: Schedule,
    pub labels: ReservedLabels,
    pub offset: FixedOffset,
}

impl Reconciler {
    pub fn new(
        policy: Policy,
        schedule: Schedule,
        labels: ReservedLabels,
        offset: FixedOffset,
    ) -> Self {
        Self {
            policy,
            schedule,
            labels,
            offset,
        }
    }

    /// Fails only when the policy needs `now` and it is absent.
    pub fn check_now(&self, now: Option<i64>) -> AppResult<()> {
        if self.policy.requires_now() && now.is_none() {
            return Err(AppError::validation(MISSING_NOW));
        }
        Ok(())
    }

    pub fn reconcile(
        &self,
        events: &[ActivityEvent],
        now: Option<i64>,
    ) -> AppResult<Reconciliation> {
        let timeline = build_timeline(events, &self.labels);

        let delta_seconds = match (self.policy, now) {
            (Policy::Elapsed, Some(now)) => {
                elapsed::delta(&timeline, now, &self.schedule, &self.offset)
            }
            (Policy::Elapsed, None) => return Err(AppError::validation(MISSING_NOW)),
            (Policy::Checkpoint, _) => checkpoint::delta(&timeline, &self.schedule, &self.offset),
        };

        Ok(Reconciliation {
            per_activity: timeline.per_activity,
            total_seconds: timeline.total_seconds,
            delta_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: i64 = 3600;

    fn reconciler(policy: Policy) -> Reconciler {
        Reconciler::new(
            policy,
            Schedule::default(),
            ReservedLabels::default(),
            FixedOffset::east_opt(0).unwrap(),
        )
    }

    fn sample_day() -> Vec<ActivityEvent> {
        vec![
            ActivityEvent::new(32_400, "work"),
            ActivityEvent::new(36_000, "BREAK"),
            ActivityEvent::new(39_600, "work"),
            ActivityEvent::new(64_800, "DAY_END"),
        ]
    }

    #[test]
    fn worked_example_on_schedule() {
        let r = reconciler(Policy::Elapsed)
            .reconcile(&sample_day(), Some(64_800))
            .unwrap();
        let report = r.to_report();

        assert_eq!(report.body.len(), 1);
        assert_eq!(report.body[0].activity, "work");
        assert_eq!(report.body[0].time, "08:00");
        assert_eq!(report.total, "08:00");
        assert_eq!(report.delta, "+00:00");
    }

    #[test]
    fn elapsed_policy_requires_now() {
        let err = reconciler(Policy::Elapsed)
            .reconcile(&sample_day(), None)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if !m.is_empty()));
    }

    #[test]
    fn checkpoint_policy_ignores_now() {
        let r = reconciler(Policy::Checkpoint);
        let a = r.reconcile(&sample_day(), None).unwrap();
        let b = r.reconcile(&sample_day(), Some(12 * H)).unwrap();
        assert_eq!(a, b);
        // 09:00 vs 08:45, 10:00 vs 13:00, 11:00 vs 14:15, 18:00 vs 18:00
        assert_eq!(a.delta_seconds, -900 - 3 * H + (3 * H + 900));
        assert_eq!(a.total_seconds, 8 * H);
    }

    #[test]
    fn policies_disagree_on_the_same_log() {
        let events = vec![
            ActivityEvent::new(8 * H, "work"),
            ActivityEvent::new(17 * H, "DAY_END"),
        ];
        let a = reconciler(Policy::Elapsed)
            .reconcile(&events, Some(17 * H))
            .unwrap();
        let b = reconciler(Policy::Checkpoint)
            .reconcile(&events, Some(17 * H))
            .unwrap();
        assert_eq!(a.delta_seconds, 9 * H - 7 * H);
        assert_eq!(b.delta_seconds, 45 * 60 - H);
    }

    #[test]
    fn shuffled_log_gives_same_result() {
        let mut shuffled = sample_day();
        shuffled.swap(0, 3);
        shuffled.swap(1, 2);
        let r = reconciler(Policy::Elapsed);
        assert_eq!(
            r.reconcile(&shuffled, Some(15 * H)).unwrap(),
            r.reconcile(&sample_day(), Some(15 * H)).unwrap()
        );
    }

    #[test]
    fn single_label_total_spans_the_log() {
        let events = vec![
            ActivityEvent::new(7 * H, "code"),
            ActivityEvent::new(9 * H, "code"),
            ActivityEvent::new(19 * H + 120, "code"),
        ];
        let r = reconciler(Policy::Elapsed)
            .reconcile(&events, Some(20 * H))
            .unwrap();
        assert_eq!(r.total_seconds, 12 * H + 120);
    }

    #[test]
    fn reserved_labels_never_reported() {
        let r = reconciler(Policy::Elapsed)
            .reconcile(&sample_day(), Some(64_800))
            .unwrap();
        let labels = ReservedLabels::default();
        assert!(r.per_activity.iter().all(|a| !labels.is_reserved(&a.label)));
    }

    #[test]
    fn behind_schedule_is_negative() {
        let events = vec![ActivityEvent::new(10 * H, "work")];
        let r = reconciler(Policy::Elapsed)
            .reconcile(&events, Some(12 * H))
            .unwrap();
        assert_eq!(r.to_report().delta, "-01:00");
    }
}
