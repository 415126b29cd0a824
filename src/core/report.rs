//! Day-level read operations: computed report and raw listing.

use crate::core::reconciler::Reconciler;
use crate::db::pool::DbPool;
use crate::db::queries::load_activities_in_window;
use crate::errors::{AppError, AppResult};
use crate::models::activity::{ActivityEvent, ActivityRecord, RawActivity};
use crate::models::report::DailyReport;
use crate::utils::time::{SECONDS_PER_DAY, clock_time};
use chrono::FixedOffset;

pub const INVALID_START: &str = "Invalid startTimestamp";

/// Most recent first, owner stripped, timestamps as local `HH:MM`.
pub fn raw_listing(records: &[ActivityRecord], offset: &FixedOffset) -> Vec<RawActivity> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.timestamp);

    sorted
        .iter()
        .rev()
        .map(|r| RawActivity {
            activity_id: r.id,
            date: clock_time(r.timestamp, offset),
            activity: r.label.clone(),
            source: r.source.clone(),
        })
        .collect()
}

pub struct ReportLogic;

impl ReportLogic {
    /// The day window `[start_of_day, start_of_day + 86400)` for one user.
    /// A failing store and an empty day both surface as "Cannot read activities".
    pub fn fetch_day(
        pool: &DbPool,
        user_id: i64,
        start_of_day: i64,
    ) -> AppResult<Vec<ActivityRecord>> {
        let end_of_day = start_of_day
            .checked_add(SECONDS_PER_DAY)
            .ok_or_else(|| AppError::validation(INVALID_START))?;

        let records = pool
            .with_conn(|conn| load_activities_in_window(conn, user_id, start_of_day, end_of_day))
            .map_err(|e| {
                tracing::warn!(error = %e, user_id, "activity fetch failed");
                AppError::cannot_read_activities()
            })?;

        if records.is_empty() {
            return Err(AppError::cannot_read_activities());
        }
        Ok(records)
    }

    pub fn computed(
        pool: &DbPool,
        reconciler: &Reconciler,
        user_id: i64,
        start_of_day: i64,
        now: Option<i64>,
    ) -> AppResult<DailyReport> {
        reconciler.check_now(now)?;

        let events: Vec<ActivityEvent> = Self::fetch_day(pool, user_id, start_of_day)?
            .iter()
            .map(ActivityRecord::event)
            .collect();

        Ok(reconciler.reconcile(&events, now)?.to_report())
    }

    pub fn raw(
        pool: &DbPool,
        offset: &FixedOffset,
        user_id: i64,
        start_of_day: i64,
    ) -> AppResult<Vec<RawActivity>> {
        let records = Self::fetch_day(pool, user_id, start_of_day)?;
        Ok(raw_listing(&records, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, ts: i64, label: &str) -> ActivityRecord {
        ActivityRecord {
            id,
            user_id: 1,
            timestamp: ts,
            label: label.to_string(),
            source: "api".to_string(),
        }
    }

    #[test]
    fn raw_listing_is_most_recent_first() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let records = vec![
            rec(3, 39_600, "work"),
            rec(1, 32_400, "work"),
            rec(4, 64_800, "DAY_END"),
            rec(2, 36_000, "BREAK"),
        ];

        let listing = raw_listing(&records, &utc);
        let view: Vec<(&str, &str)> = listing
            .iter()
            .map(|r| (r.activity.as_str(), r.date.as_str()))
            .collect();

        assert_eq!(
            view,
            vec![
                ("DAY_END", "18:00"),
                ("work", "11:00"),
                ("BREAK", "10:00"),
                ("work", "09:00"),
            ]
        );
        assert_eq!(listing[0].activity_id, 4);
    }

    #[test]
    fn day_window_past_the_last_timestamp_is_rejected() {
        let pool = DbPool::in_memory().unwrap();
        let err = ReportLogic::fetch_day(&pool, 1, i64::MAX).unwrap_err();
        assert_eq!(err.client_message(), INVALID_START);
    }
}
