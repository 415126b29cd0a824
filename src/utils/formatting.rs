//! Formatting utilities used for API and CLI outputs.

fn hours_minutes(secs: i64) -> (u64, u64) {
    let abs_s = secs.unsigned_abs();
    (abs_s / 3600, (abs_s % 3600) / 60)
}

/// Unsigned `HH:MM`; leftover seconds are truncated.
pub fn format_duration(secs: i64) -> String {
    let (hours, minutes) = hours_minutes(secs);
    format!("{:02}:{:02}", hours, minutes)
}

/// Signed `+HH:MM` / `-HH:MM`. Zero is rendered as `+00:00`.
pub fn format_delta(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "+" };
    let (hours, minutes) = hours_minutes(secs);
    format!("{}{:02}:{:02}", sign, hours, minutes)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_zero_padded_and_truncated() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(8 * 3600), "08:00");
        assert_eq!(format_duration(3600 + 59 * 60 + 59), "01:59");
        assert_eq!(format_duration(125 * 3600), "125:00");
    }

    #[test]
    fn delta_always_carries_a_sign() {
        assert_eq!(format_delta(0), "+00:00");
        assert_eq!(format_delta(90 * 60), "+01:30");
        assert_eq!(format_delta(-90 * 60), "-01:30");
        assert_eq!(format_delta(-59), "-00:00");
        assert!(format_delta(i64::MIN).starts_with('-'));
    }
}
