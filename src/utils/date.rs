use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn iso_date_str(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Month length for a 1-based month, standard Gregorian leap rule.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Whole calendar days from `d1` to `d2`.
pub fn day_difference(d1: NaiveDate, d2: NaiveDate) -> i64 {
    (d2 - d1).num_days()
}

/// Expands a period string into concrete dates.
/// Accepted forms: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`.
pub fn generate_from_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    if let Some(d) = parse_date(p) {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        if (1000..=9999).contains(&year) {
            return Ok(all_days_of_year(year));
        }
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// Expands `start:end`, taking the first day of `start` and the last of `end`.
pub fn generate_range(start: &str, end: &str) -> AppResult<Vec<NaiveDate>> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().unwrap();
    let end_date = *e.last().unwrap();

    let mut out = Vec::new();
    let mut d = start_date;

    while d <= end_date {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    Ok(out)
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().unwrap();
    }

    v
}
