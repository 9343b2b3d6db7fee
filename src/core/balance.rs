//! Balance aggregation: month-to-date balance, all-time balance, leave-by.
//!
//! Every function here is deterministic over its inputs; `today` is injected
//! by the caller so the same code serves the CLI and the test fixtures. The
//! all-time aggregation is the only fallible path, and it fails only on
//! store I/O, never on malformed day data.

use crate::core::day_total::day_total;
use crate::core::sequence::{SENTINEL, times_are_progressing, validate_times};
use crate::errors::AppResult;
use crate::models::WorkSchedule;
use crate::store::TimeStore;
use crate::utils::date::days_in_month;
use crate::utils::time::{format_minutes, hhmm_to_minutes};
use chrono::{Datelike, NaiveDate};

/// Last day of `month` the month balance covers: full length for any month
/// other than the current one, otherwise today (or yesterday unless
/// `count_today` is set). May be 0 on the 1st of the current month.
pub fn balance_cutoff_day(year: i32, month: u32, today: NaiveDate, count_today: bool) -> u32 {
    if year != today.year() || month != today.month() {
        return days_in_month(year, month);
    }
    if count_today {
        today.day()
    } else {
        today.day() - 1
    }
}

/// Month-to-date balance: worked time minus expected time over the month's
/// working days up to the cutoff.
///
/// Expected time only starts accruing at the first day with a computable
/// total: leading unworked gaps before the first entry never count against
/// the balance, but every working day after that first entry does, logged
/// or not.
pub fn month_balance(
    year: i32,
    month: u32,
    today: NaiveDate,
    schedule: &WorkSchedule,
    store: &dyn TimeStore,
) -> String {
    let cutoff = balance_cutoff_day(year, month, today, schedule.count_today);
    let mut working_days_to_compute = 0i64;
    let mut month_total_worked = 0i64;
    let mut count_days = false;

    for day in 1..=cutoff.min(days_in_month(year, month)) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            break;
        };
        if !schedule.is_working_day(date) {
            continue;
        }

        if let Some(mins) = day_total(date, store).and_then(|t| hhmm_to_minutes(&t)) {
            count_days = true;
            month_total_worked += mins;
        }
        if count_days {
            working_days_to_compute += 1;
        }
    }

    let month_total_to_work = schedule.hours_per_day_minutes() * -working_days_to_compute;
    format_minutes(month_total_to_work + month_total_worked)
}

/// Date up to which (exclusive) the all-time balance runs for a displayed
/// month: today (+1 when `count_today`) while displaying the current month,
/// else the 1st of the following month so an elapsed month counts in full.
pub fn all_time_balance_target(displayed: NaiveDate, today: NaiveDate, count_today: bool) -> NaiveDate {
    if displayed.year() == today.year() && displayed.month() == today.month() {
        if count_today {
            today.succ_opt().unwrap_or(today)
        } else {
            today
        }
    } else {
        let (next_year, next_month) = if displayed.month() == 12 {
            (displayed.year() + 1, 1)
        } else {
            (displayed.year(), displayed.month() + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap_or(displayed)
    }
}

/// Cumulative balance over the whole tracked history, from the first punch
/// entry on or after the configured start date up to `target` (exclusive).
///
/// Streams day by day instead of materializing months, so a multi-year
/// history costs one pass. Days without a computable total contribute
/// `00:00` worked; non-working days are skipped entirely. The only error
/// surface is the store read locating the first entry.
pub fn all_time_balance(
    target: NaiveDate,
    schedule: &WorkSchedule,
    store: &dyn TimeStore,
) -> AppResult<String> {
    let Some(first) = store.first_punch_date(schedule.balance_start_date)? else {
        return Ok("00:00".to_string());
    };

    let hours_per_day = schedule.hours_per_day_minutes();
    let mut all_time_total = 0i64;
    let mut date = first;
    while date < target {
        if schedule.is_working_day(date) {
            let worked = day_total(date, store)
                .and_then(|t| hhmm_to_minutes(&t))
                .unwrap_or(0);
            all_time_total += worked - hours_per_day;
        }
        let Some(next) = date.succ_opt() else { break };
        date = next;
    }

    Ok(format_minutes(all_time_total))
}

/// Clock time at which the user may stop working today to exactly meet the
/// target hours, given today's raw punch values: last punch plus whatever
/// remains of the target. Returns the sentinel for an empty day, an invalid
/// inner slot, or a non-progressing sequence.
pub fn calculate_leave_by(values: &[String], hours_per_day: &str) -> String {
    let validated = validate_times(values, true);
    if validated.is_empty() || validated.iter().any(|t| t == SENTINEL) {
        return SENTINEL.to_string();
    }

    let even_len = validated.len() / 2 * 2;
    if !times_are_progressing(&validated[..even_len]) {
        return SENTINEL.to_string();
    }

    let mut worked = 0i64;
    for pair in validated[..even_len].chunks_exact(2) {
        let (Some(begin), Some(end)) = (hhmm_to_minutes(&pair[0]), hhmm_to_minutes(&pair[1]))
        else {
            return SENTINEL.to_string();
        };
        worked += end - begin;
    }

    let last = &validated[validated.len() - 1];
    let Some(last_mins) = hhmm_to_minutes(last) else {
        return SENTINEL.to_string();
    };
    let Some(target) = hhmm_to_minutes(hours_per_day) else {
        return SENTINEL.to_string();
    };
    format_minutes(last_mins + (target - worked))
}

/// A leave-by prediction past midnight is indeterminate, not a next-day time.
pub fn clamp_leave_by(leave_by: &str) -> String {
    if leave_by <= "23:59" {
        leave_by.to_string()
    } else {
        SENTINEL.to_string()
    }
}

/// Surplus/deficit for one finished day.
pub fn day_balance(total: &str, hours_per_day: &str) -> Option<String> {
    Some(format_minutes(
        hhmm_to_minutes(total)? - hhmm_to_minutes(hours_per_day)?,
    ))
}
