//! Validation and ordering checks for a single day's punch sequence.
//!
//! A sequence is an ordered list of `HH:MM` strings holding alternating
//! begin/end punches. Entries that fail `validate_time` are replaced by the
//! `SENTINEL` placeholder rather than rejected, so a half-typed day degrades
//! gracefully instead of erroring.

use crate::utils::time::validate_time;

/// Placeholder for an invalid or still-empty punch slot.
pub const SENTINEL: &str = "--:--";

/// Maps each value through `validate_time`, substituting the sentinel for
/// invalid entries. With `remove_ending_invalids`, sentinels are stripped
/// from the end only, stopping at the first valid value scanning backward:
/// `["08:00", "--:--", "10:00", "--:--", "--:--"]` becomes
/// `["08:00", "--:--", "10:00"]`.
pub fn validate_times(values: &[String], remove_ending_invalids: bool) -> Vec<String> {
    let mut validated: Vec<String> = values
        .iter()
        .map(|t| {
            if validate_time(t) {
                t.clone()
            } else {
                SENTINEL.to_string()
            }
        })
        .collect();

    if remove_ending_invalids {
        while validated.last().map(|t| t == SENTINEL).unwrap_or(false) {
            validated.pop();
        }
    }

    validated
}

/// True iff every begin/end pair is strictly increasing. Lexicographic
/// comparison equals chronological comparison for zero-padded `HH:MM`.
/// A trailing unpaired entry is ignored.
pub fn times_are_progressing(times: &[String]) -> bool {
    times.chunks_exact(2).all(|pair| pair[0] < pair[1])
}

/// Whether a day's raw values contain an entry error: an inner slot left
/// invalid after trailing-trim, or any entry not later than its predecessor.
pub fn has_input_error(values: &[String]) -> bool {
    let validated = validate_times(values, true);
    if validated.iter().any(|t| t == SENTINEL) {
        return true;
    }
    validated.windows(2).any(|w| w[0] >= w[1])
}
