use crate::errors::AppResult;
use crate::models::activity::ActivityRecord;
use crate::models::user::User;
use rusqlite::{Connection, Result, Row, params};

pub fn map_activity_row(row: &Row) -> Result<ActivityRecord> {
    Ok(ActivityRecord {
        id: row.get("activity_id")?,
        user_id: row.get("user_id")?,
        timestamp: row.get("date")?,
        label: row.get("activity")?,
        source: row.get("source")?,
    })
}

pub fn map_user_row(row: &Row) -> Result<User> {
    Ok(User {
        user_id: row.get("user_id")?,
        username: row.get("username")?,
        password: row.get("password")?,
    })
}

/// Activities of `user_id` with `start <= date < end`, oldest first.
pub fn load_activities_in_window(
    conn: &Connection,
    user_id: i64,
    start: i64,
    end: i64,
) -> AppResult<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT activity_id, user_id, date, activity, source FROM activities
         WHERE user_id = ?1 AND date >= ?2 AND date < ?3
         ORDER BY date ASC, activity_id ASC",
    )?;

    let rows = stmt.query_map(params![user_id, start, end], map_activity_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_activity(
    conn: &Connection,
    user_id: i64,
    timestamp: i64,
    label: &str,
    source: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO activities (date, activity, user_id, source)
         VALUES (?1, ?2, ?3, ?4)",
        params![timestamp, label, user_id, source],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows touched: 0 when the activity does not exist
/// or belongs to someone else.
pub fn update_activity(
    conn: &Connection,
    user_id: i64,
    activity_id: i64,
    timestamp: i64,
    label: &str,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE activities SET date = ?1, activity = ?2
         WHERE activity_id = ?3 AND user_id = ?4",
        params![timestamp, label, activity_id, user_id],
    )?;
    Ok(n)
}

pub fn insert_user(conn: &Connection, username: &str, password_digest: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, password_digest],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_users(
    conn: &Connection,
    username: &str,
    password_digest: &str,
) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare_cached(
        "SELECT user_id, username, password FROM users
         WHERE username = ?1 AND password = ?2",
    )?;

    let rows = stmt.query_map(params![username, password_digest], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn user_exists(conn: &Connection, user_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM users WHERE user_id = ?1 LIMIT 1")?;
    Ok(stmt.exists([user_id])?)
}
