use rtimebalance::core::sequence::{
    SENTINEL, has_input_error, times_are_progressing, validate_times,
};

fn seq(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_validate_times_substitutes_sentinel() {
    let out = validate_times(&seq(&["08:00", "nope", "10:00"]), false);
    assert_eq!(out, seq(&["08:00", SENTINEL, "10:00"]));
}

#[test]
fn test_validate_times_keeps_valid_values() {
    let input = seq(&["08:00", "12:00", "13:00", "17:00"]);
    assert_eq!(validate_times(&input, false), input);
}

#[test]
fn test_validate_times_trims_trailing_invalids_only() {
    let out = validate_times(&seq(&["08:00", "", "10:00", "", ""]), true);
    assert_eq!(out, seq(&["08:00", SENTINEL, "10:00"]));
}

#[test]
fn test_validate_times_trim_stops_at_first_valid() {
    let out = validate_times(&seq(&["", "08:00"]), true);
    assert_eq!(out, seq(&[SENTINEL, "08:00"]));
}

#[test]
fn test_validate_times_all_invalid_trims_to_empty() {
    assert!(validate_times(&seq(&["", "x", "--:--"]), true).is_empty());
}

#[test]
fn test_times_are_progressing_checks_each_pair() {
    assert!(times_are_progressing(&seq(&[
        "08:00", "12:00", "13:00", "17:00"
    ])));
    assert!(!times_are_progressing(&seq(&["09:00", "08:00"])));
    assert!(!times_are_progressing(&seq(&[
        "08:00", "12:00", "13:00", "13:00"
    ])));
    // trailing unpaired entry is ignored
    assert!(times_are_progressing(&seq(&["08:00", "12:00", "13:00"])));
}

#[test]
fn test_has_input_error_on_inner_invalid() {
    assert!(has_input_error(&seq(&["08:00", "oops", "10:00"])));
}

#[test]
fn test_has_input_error_on_unordered_neighbours() {
    // adjacent comparison is stricter than pairwise progression
    assert!(has_input_error(&seq(&["08:00", "12:00", "11:00", "17:00"])));
    assert!(has_input_error(&seq(&["08:00", "08:00"])));
}

#[test]
fn test_has_input_error_clean_cases() {
    assert!(!has_input_error(&seq(&["08:00", "12:00"])));
    assert!(!has_input_error(&[]));
    // trailing invalids are trimmed before the check
    assert!(!has_input_error(&seq(&["08:00", "12:00", ""])));
}
