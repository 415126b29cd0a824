pub mod add;
pub mod config;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod serve;
pub mod user;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::start_of_day;
use chrono::{FixedOffset, NaiveDate};

/// Parse `--date` (default today) and return it with its local midnight.
pub(crate) fn resolve_day(
    raw: Option<&String>,
    offset: &FixedOffset,
) -> AppResult<(NaiveDate, i64)> {
    let day = date::parse_date_or_today(raw)
        .ok_or_else(|| AppError::InvalidDate(raw.cloned().unwrap_or_default()))?;
    let start = start_of_day(day, offset)?;
    Ok((day, start))
}
