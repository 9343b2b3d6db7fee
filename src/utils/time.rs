//! Time utilities: signed HH:MM arithmetic, formatting minutes, validation.
//!
//! All functions here are total over the string domain: malformed input
//! yields `None`/`false`, never a panic or an error. Balances routinely
//! exceed 24 hours and may be negative, so the duration grammar is
//! `[-]H+:MM` with no upper bound on hours; clock punches are the stricter
//! `validate_time` subset (00:00 - 23:59).

use chrono::NaiveDate;
use regex::Regex;

/// True iff the string carries a leading minus sign.
pub fn is_negative(t: &str) -> bool {
    t.starts_with('-')
}

/// Parses `[-]H+:M+` into signed minutes.
/// Raw minute fields above 59 are accepted and normalized by the caller's
/// later formatting (`00:60` parses to 60 minutes).
pub fn hhmm_to_minutes(t: &str) -> Option<i64> {
    let neg = is_negative(t);
    let unsigned = if neg { &t[1..] } else { t };
    let (h, m) = unsigned.split_once(':')?;
    let hours: i64 = h.parse().ok()?;
    let minutes: i64 = m.parse().ok()?;
    if hours < 0 || minutes < 0 {
        return None;
    }
    let total = hours * 60 + minutes;
    Some(if neg { -total } else { total })
}

/// Formats signed minutes as `[-]HH:MM`, zero-padded to two digits.
/// Hours grow past two digits without truncation; minus-zero is `00:00`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// `a + b`, both `[-]H+:MM`.
pub fn sum_time(a: &str, b: &str) -> Option<String> {
    Some(format_minutes(hhmm_to_minutes(a)? + hhmm_to_minutes(b)?))
}

/// Duration from `earlier` to `later` (`later - earlier`).
/// Negative when `later` precedes `earlier`.
pub fn time_between(earlier: &str, later: &str) -> Option<String> {
    Some(format_minutes(hhmm_to_minutes(later)? - hhmm_to_minutes(earlier)?))
}

/// `t * n`.
pub fn multiply_time(t: &str, n: i64) -> Option<String> {
    Some(format_minutes(hhmm_to_minutes(t)? * n))
}

/// Validates a clock time `HH:MM` with hours 00-23, optionally signed.
pub fn validate_time(t: &str) -> bool {
    let re = Regex::new(r"^-?([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
    re.is_match(t)
}

/// Formats an hour/minute pair as `HH:MM`.
pub fn hour_min_formatted(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

/// Validates a `YYYY-MM-DD` date string: two-digit month/day fields and the
/// day within the month's actual length (leap years included).
pub fn validate_date(date: &str) -> bool {
    let re = Regex::new(r"^[12][0-9]{3}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap();
    if !re.is_match(date) {
        return false;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
