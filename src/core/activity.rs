use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_activity, update_activity, user_exists};
use crate::errors::{AppError, AppResult};

pub const MISSING_FIELDS: &str = "No date/activity/user_id provided";

/// Where an activity row was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Api,
    Cli,
}

impl Source {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Source::Api => "api",
            Source::Cli => "cli",
        }
    }
}

fn require_label(label: Option<&str>) -> AppResult<&str> {
    label
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| AppError::validation(MISSING_FIELDS))
}

/// High-level business logic for adding and editing activities.
pub struct ActivityLogic;

impl ActivityLogic {
    pub fn add(
        pool: &DbPool,
        user_id: Option<i64>,
        timestamp: Option<i64>,
        label: Option<&str>,
        source: Source,
    ) -> AppResult<i64> {
        let (Some(user_id), Some(timestamp)) = (user_id, timestamp) else {
            return Err(AppError::validation(MISSING_FIELDS));
        };
        let label = require_label(label)?;

        pool.with_conn(|conn| {
            if !user_exists(conn, user_id)? {
                return Err(AppError::validation(format!("Unknown user_id {}", user_id)));
            }

            let id = insert_activity(conn, user_id, timestamp, label, source.to_db_str())?;

            if let Err(e) = ttlog(
                conn,
                "add",
                &format!("user #{}", user_id),
                &format!("Activity #{} '{}' at {}", id, label, timestamp),
            ) {
                tracing::warn!(error = %e, "failed to write internal log");
            }

            Ok(id)
        })
    }

    pub fn edit(
        pool: &DbPool,
        user_id: Option<i64>,
        activity_id: Option<i64>,
        timestamp: Option<i64>,
        label: Option<&str>,
    ) -> AppResult<()> {
        let (Some(user_id), Some(activity_id), Some(timestamp)) = (user_id, activity_id, timestamp)
        else {
            return Err(AppError::validation(MISSING_FIELDS));
        };
        let label = require_label(label)?;

        pool.with_conn(|conn| {
            let touched = update_activity(conn, user_id, activity_id, timestamp, label)?;
            if touched == 0 {
                return Err(AppError::DataUnavailable(format!(
                    "Activity {} not found",
                    activity_id
                )));
            }

            if let Err(e) = ttlog(
                conn,
                "edit",
                &format!("user #{}", user_id),
                &format!("Activity #{} → '{}' at {}", activity_id, label, timestamp),
            ) {
                tracing::warn!(error = %e, "failed to write internal log");
            }

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthLogic;
    use crate::db::migrate::run_pending_migrations;
    use crate::db::queries::load_activities_in_window;

    fn pool_with_user() -> (DbPool, i64) {
        let pool = DbPool::in_memory().unwrap();
        pool.with_conn(|c| run_pending_migrations(c)).unwrap();
        let id = AuthLogic::create_user(&pool, "alice", "pw").unwrap();
        (pool, id)
    }

    #[test]
    fn add_requires_every_field() {
        let (pool, user) = pool_with_user();
        for (u, ts, label) in [
            (None, Some(1), Some("work")),
            (Some(user), None, Some("work")),
            (Some(user), Some(1), None),
            (Some(user), Some(1), Some("  ")),
        ] {
            let err = ActivityLogic::add(&pool, u, ts, label, Source::Api).unwrap_err();
            assert_eq!(err.client_message(), MISSING_FIELDS);
        }
    }

    #[test]
    fn add_then_edit() {
        let (pool, user) = pool_with_user();
        let id =
            ActivityLogic::add(&pool, Some(user), Some(100), Some("work"), Source::Cli).unwrap();
        ActivityLogic::edit(&pool, Some(user), Some(id), Some(200), Some("mail")).unwrap();

        let rows = pool
            .with_conn(|c| load_activities_in_window(c, user, 0, 1000))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].timestamp, 200);
        assert_eq!(rows[0].label, "mail");
    }

    #[test]
    fn unknown_user_is_rejected() {
        let (pool, user) = pool_with_user();
        let err = ActivityLogic::add(&pool, Some(user + 1), Some(1), Some("w"), Source::Api)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn editing_a_missing_activity_fails() {
        let (pool, user) = pool_with_user();
        let err = ActivityLogic::edit(&pool, Some(user), Some(42), Some(1), Some("w")).unwrap_err();
        assert!(matches!(err, AppError::DataUnavailable(_)));
    }
}
