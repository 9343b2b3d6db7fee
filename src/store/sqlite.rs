use crate::errors::AppResult;
use crate::models::Waiver;
use crate::store::TimeStore;
use crate::store::initialize::init_store;
use crate::store::pool::DbPool;
use crate::store::queries;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// SQLite-backed store with a write-through in-memory mirror.
///
/// Lookups served by the engine come from the mirror; every mutation writes
/// the database first and the mirror second, so a failed write leaves both
/// sides consistent. `reload()` rebuilds the mirror wholesale after an
/// external change (import, manual edit).
pub struct SqliteStore {
    pool: DbPool,
    punches: BTreeMap<NaiveDate, Vec<String>>,
    waivers: BTreeMap<NaiveDate, Waiver>,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_store(&pool.conn)?;
        let mut store = Self {
            pool,
            punches: BTreeMap::new(),
            waivers: BTreeMap::new(),
        };
        store.reload()?;
        Ok(store)
    }

    pub fn reload(&mut self) -> AppResult<()> {
        self.punches = queries::load_all_punches(&self.pool.conn)?
            .into_iter()
            .collect();
        self.waivers = queries::load_all_waivers(&self.pool.conn)?
            .into_iter()
            .collect();
        Ok(())
    }

    /// Replaces a date's punch sequence. An empty sequence removes the row,
    /// so days never linger as empty arrays.
    pub fn set_punches(&mut self, date: NaiveDate, times: Vec<String>) -> AppResult<()> {
        if times.is_empty() {
            return self.remove_punches(date).map(|_| ());
        }
        queries::upsert_punches(&self.pool.conn, date, &times)?;
        self.punches.insert(date, times);
        Ok(())
    }

    pub fn remove_punches(&mut self, date: NaiveDate) -> AppResult<bool> {
        let removed = queries::delete_punches(&self.pool.conn, date)?;
        self.punches.remove(&date);
        Ok(removed)
    }

    pub fn set_waiver(&mut self, date: NaiveDate, waiver: Waiver) -> AppResult<()> {
        queries::upsert_waiver(&self.pool.conn, date, &waiver)?;
        self.waivers.insert(date, waiver);
        Ok(())
    }

    pub fn remove_waiver(&mut self, date: NaiveDate) -> AppResult<bool> {
        let removed = queries::delete_waiver(&self.pool.conn, date)?;
        self.waivers.remove(&date);
        Ok(removed)
    }

    /// All punch entries in date order, for export.
    pub fn all_punches(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<String>)> {
        self.punches.iter()
    }

    /// All waivers in date order, for export.
    pub fn all_waivers(&self) -> impl Iterator<Item = (&NaiveDate, &Waiver)> {
        self.waivers.iter()
    }
}

impl TimeStore for SqliteStore {
    fn punches(&self, date: NaiveDate) -> Option<Vec<String>> {
        self.punches.get(&date).cloned()
    }

    fn waiver(&self, date: NaiveDate) -> Option<Waiver> {
        self.waivers.get(&date).cloned()
    }

    fn first_punch_date(&self, start: NaiveDate) -> AppResult<Option<NaiveDate>> {
        queries::first_punch_date(&self.pool.conn, start)
    }
}
