//! Net worked duration for a single day.

use crate::core::sequence::{SENTINEL, times_are_progressing, validate_times};
use crate::store::TimeStore;
use crate::utils::time::{format_minutes, hhmm_to_minutes};
use chrono::NaiveDate;

/// Computes the day total for `date`, or `None` when no total is computable.
///
/// A waiver short-circuits punch computation entirely. Otherwise the day
/// must have ended (an even number of at least two entries, all valid) and
/// every begin/end pair must progress; an out-of-order day is indeterminate,
/// not a negative duration.
pub fn day_total(date: NaiveDate, store: &dyn TimeStore) -> Option<String> {
    if let Some(waiver) = store.waiver(date) {
        return Some(waiver.hours);
    }

    let values = store.punches(date)?;
    if values.is_empty() {
        return None;
    }

    let validated = validate_times(&values, false);
    let has_expected_size = values.len() >= 2 && values.len() % 2 == 0;
    let times_ok = !validated.is_empty() && validated.iter().all(|t| t != SENTINEL);
    if !(has_expected_size && times_ok) {
        return None;
    }
    if !times_are_progressing(&validated) {
        return None;
    }

    let mut total = 0i64;
    for pair in validated.chunks_exact(2) {
        total += hhmm_to_minutes(&pair[1])? - hhmm_to_minutes(&pair[0])?;
    }
    Some(format_minutes(total))
}
