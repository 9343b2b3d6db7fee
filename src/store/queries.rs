use crate::errors::{AppError, AppResult};
use crate::models::Waiver;
use crate::utils::date::iso_date_str;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

fn parse_key(date_str: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date_str.to_string()))
}

pub fn load_all_punches(conn: &Connection) -> AppResult<Vec<(NaiveDate, Vec<String>)>> {
    let mut stmt = conn.prepare("SELECT date, times FROM punches ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| {
        let date: String = row.get(0)?;
        let times: String = row.get(1)?;
        Ok((date, times))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (date_str, times_json) = r?;
        let date = parse_key(&date_str)?;
        let times: Vec<String> = serde_json::from_str(&times_json)?;
        out.push((date, times));
    }
    Ok(out)
}

pub fn load_all_waivers(conn: &Connection) -> AppResult<Vec<(NaiveDate, Waiver)>> {
    let mut stmt = conn.prepare("SELECT date, reason, hours FROM waivers ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| {
        let date: String = row.get(0)?;
        let reason: String = row.get(1)?;
        let hours: String = row.get(2)?;
        Ok((date, reason, hours))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (date_str, reason, hours) = r?;
        out.push((parse_key(&date_str)?, Waiver { reason, hours }));
    }
    Ok(out)
}

pub fn upsert_punches(conn: &Connection, date: NaiveDate, times: &[String]) -> AppResult<()> {
    let times_json = serde_json::to_string(times)?;
    conn.execute(
        "INSERT INTO punches (date, times) VALUES (?1, ?2)
         ON CONFLICT(date) DO UPDATE SET times = excluded.times",
        params![iso_date_str(date), times_json],
    )?;
    Ok(())
}

pub fn delete_punches(conn: &Connection, date: NaiveDate) -> AppResult<bool> {
    let affected = conn.execute(
        "DELETE FROM punches WHERE date = ?1",
        params![iso_date_str(date)],
    )?;
    Ok(affected > 0)
}

pub fn upsert_waiver(conn: &Connection, date: NaiveDate, waiver: &Waiver) -> AppResult<()> {
    conn.execute(
        "INSERT INTO waivers (date, reason, hours) VALUES (?1, ?2, ?3)
         ON CONFLICT(date) DO UPDATE SET reason = excluded.reason, hours = excluded.hours",
        params![iso_date_str(date), waiver.reason, waiver.hours],
    )?;
    Ok(())
}

pub fn delete_waiver(conn: &Connection, date: NaiveDate) -> AppResult<bool> {
    let affected = conn.execute(
        "DELETE FROM waivers WHERE date = ?1",
        params![iso_date_str(date)],
    )?;
    Ok(affected > 0)
}

/// Earliest punch-entry date on or after `start`, straight from the store.
pub fn first_punch_date(conn: &Connection, start: NaiveDate) -> AppResult<Option<NaiveDate>> {
    let first: Option<String> = conn
        .query_row(
            "SELECT MIN(date) FROM punches WHERE date >= ?1",
            params![iso_date_str(start)],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    match first {
        Some(s) => Ok(Some(parse_key(&s)?)),
        None => Ok(None),
    }
}
