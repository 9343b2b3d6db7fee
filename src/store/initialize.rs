use crate::errors::AppResult;
use rusqlite::Connection;

/// Creates the store schema if missing. Punch sequences are stored as a
/// JSON array per date so a day is always read and written whole.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS punches (
            date  TEXT PRIMARY KEY,
            times TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS waivers (
            date   TEXT PRIMARY KEY,
            reason TEXT NOT NULL DEFAULT '',
            hours  TEXT NOT NULL
        );",
    )?;
    Ok(())
}
