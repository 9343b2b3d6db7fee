use chrono::NaiveDate;
use rtimebalance::core::day_total::day_total;
use rtimebalance::models::Waiver;
use rtimebalance::store::MemStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_complete_day() {
    let mut store = MemStore::new();
    let day = date(2020, 7, 1);
    store.set_punches(day, &["08:00", "12:00", "13:00", "17:00"]);
    assert_eq!(day_total(day, &store), Some("08:00".to_string()));
}

#[test]
fn test_six_entry_day() {
    let mut store = MemStore::new();
    let day = date(2020, 7, 1);
    store.set_punches(day, &["08:00", "10:00", "10:30", "11:30", "13:00", "17:00"]);
    assert_eq!(day_total(day, &store), Some("07:00".to_string()));
}

#[test]
fn test_missing_day() {
    let store = MemStore::new();
    assert_eq!(day_total(date(2020, 7, 1), &store), None);
}

#[test]
fn test_unterminated_day() {
    let mut store = MemStore::new();
    let day = date(2020, 7, 1);
    store.set_punches(day, &["08:00", "12:00", "13:00"]);
    assert_eq!(day_total(day, &store), None);
}

#[test]
fn test_invalid_entry_blocks_total() {
    let mut store = MemStore::new();
    let day = date(2020, 7, 1);
    store.set_punches(day, &["08:00", "12:00", "13:00", "oops"]);
    assert_eq!(day_total(day, &store), None);
}

#[test]
fn test_non_monotonic_day_is_indeterminate() {
    let mut store = MemStore::new();
    let day = date(2020, 7, 1);
    store.set_punches(day, &["09:00", "08:00"]);
    // out-of-order is reported as indeterminate, not a negative duration
    assert_eq!(day_total(day, &store), None);
}

#[test]
fn test_waiver_short_circuits_punches() {
    let mut store = MemStore::new();
    let day = date(2020, 7, 1);
    store.set_punches(day, &["08:00", "12:00", "13:00", "17:00"]);
    store.set_waiver(day, Waiver::new("holiday", "04:00"));
    assert_eq!(day_total(day, &store), Some("04:00".to_string()));
}

#[test]
fn test_waiver_alone() {
    let mut store = MemStore::new();
    let day = date(2020, 7, 1);
    store.set_waiver(day, Waiver::new("PTO", "08:00"));
    assert_eq!(day_total(day, &store), Some("08:00".to_string()));
}
