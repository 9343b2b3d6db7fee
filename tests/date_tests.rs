use chrono::NaiveDate;
use rtimebalance::utils::date::{
    all_days_of_month, day_difference, generate_from_period, generate_range, iso_date_str,
    parse_date,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_and_format_round_trip() {
    let d = parse_date("2020-07-01").unwrap();
    assert_eq!(iso_date_str(d), "2020-07-01");
    assert!(parse_date("2020-13-01").is_none());
    assert!(parse_date("not a date").is_none());
}

#[test]
fn test_day_difference() {
    assert_eq!(day_difference(date(2020, 7, 1), date(2020, 7, 8)), 7);
    assert_eq!(day_difference(date(2020, 7, 8), date(2020, 7, 1)), -7);
    assert_eq!(day_difference(date(2020, 2, 28), date(2020, 3, 1)), 2); // leap
    assert_eq!(day_difference(date(2021, 2, 28), date(2021, 3, 1)), 1);
}

#[test]
fn test_all_days_of_month() {
    let days = all_days_of_month(2020, 2);
    assert_eq!(days.len(), 29);
    assert_eq!(days[0], date(2020, 2, 1));
    assert_eq!(*days.last().unwrap(), date(2020, 2, 29));
}

#[test]
fn test_generate_from_period() {
    assert_eq!(
        generate_from_period("2020-07-15").unwrap(),
        vec![date(2020, 7, 15)]
    );
    assert_eq!(generate_from_period("2020-07").unwrap().len(), 31);
    assert_eq!(generate_from_period("2020").unwrap().len(), 366);
    assert!(generate_from_period("yesterday").is_err());
}

#[test]
fn test_generate_range() {
    let days = generate_range("2020-06", "2020-07").unwrap();
    assert_eq!(days.first().unwrap(), &date(2020, 6, 1));
    assert_eq!(days.last().unwrap(), &date(2020, 7, 31));
    assert_eq!(days.len(), 61);
}
