//! Time utilities: parsing HH:MM, time-of-day in a fixed offset, day bounds.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike};

pub const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// `HH:MM` → seconds since midnight.
pub fn parse_time_to_seconds(t: &str) -> AppResult<i64> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(time.num_seconds_from_midnight() as i64)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse offsets such as `+02:00`, `-05:30` or `Z`.
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match s.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let (h, m) = rest.split_once(':')?;
    let hours: i32 = h.parse().ok()?;
    let minutes: i32 = m.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn to_local(ts: i64, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.with_timezone(offset))
}

/// Seconds since local midnight of an epoch timestamp.
pub fn time_of_day(ts: i64, offset: &FixedOffset) -> i64 {
    to_local(ts, offset)
        .map(|dt| dt.num_seconds_from_midnight() as i64)
        .unwrap_or_else(|| ts.rem_euclid(SECONDS_PER_DAY))
}

/// Render an epoch timestamp as local `HH:MM`.
pub fn clock_time(ts: i64, offset: &FixedOffset) -> String {
    let secs = time_of_day(ts, offset);
    format!("{:02}:{:02}", secs / 3600, (secs % 3600) / 60)
}

/// Epoch seconds of `date` at `time` in the given offset.
pub fn timestamp_at(date: NaiveDate, time: NaiveTime, offset: &FixedOffset) -> AppResult<i64> {
    date.and_time(time)
        .and_local_timezone(*offset)
        .single()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| AppError::InvalidDate(format!("{} {}", date, time)))
}

/// Epoch seconds of local midnight for `date`.
pub fn start_of_day(date: NaiveDate, offset: &FixedOffset) -> AppResult<i64> {
    timestamp_at(date, NaiveTime::MIN, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn parses_clock_strings() {
        assert_eq!(parse_time_to_seconds("09:00").unwrap(), 32_400);
        assert_eq!(parse_time_to_seconds("18:00").unwrap(), 64_800);
        assert!(matches!(
            parse_time_to_seconds("9h"),
            Err(AppError::InvalidTime(_))
        ));
    }

    #[test]
    fn parses_offsets() {
        assert_eq!(parse_utc_offset("+02:00").unwrap().local_minus_utc(), 7200);
        assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -19_800);
        assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
        assert!(parse_utc_offset("02:00").is_none());
        assert!(parse_utc_offset("+02:75").is_none());
    }

    #[test]
    fn time_of_day_follows_the_offset() {
        assert_eq!(time_of_day(32_400, &utc()), 32_400);
        let cet = parse_utc_offset("+01:00").unwrap();
        assert_eq!(time_of_day(32_400, &cet), 36_000);
        assert_eq!(clock_time(32_400, &cet), "10:00");
    }

    #[test]
    fn day_bounds() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let start = start_of_day(d, &utc()).unwrap();
        assert_eq!(start % SECONDS_PER_DAY, 0);
        assert_eq!(time_of_day(start + 100, &utc()), 100);
        let t = parse_time("09:30").unwrap();
        assert_eq!(timestamp_at(d, t, &utc()).unwrap(), start + 34_200);
    }
}
