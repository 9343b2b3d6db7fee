use crate::errors::AppResult;
use crate::models::Waiver;
use crate::store::TimeStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory store, used by the engine tests and handy for embedding the
/// engine without SQLite.
#[derive(Debug, Default)]
pub struct MemStore {
    punches: BTreeMap<NaiveDate, Vec<String>>,
    waivers: BTreeMap<NaiveDate, Waiver>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_punches(&mut self, date: NaiveDate, times: &[&str]) {
        self.punches
            .insert(date, times.iter().map(|t| t.to_string()).collect());
    }

    pub fn set_waiver(&mut self, date: NaiveDate, waiver: Waiver) {
        self.waivers.insert(date, waiver);
    }
}

impl TimeStore for MemStore {
    fn punches(&self, date: NaiveDate) -> Option<Vec<String>> {
        self.punches.get(&date).cloned()
    }

    fn waiver(&self, date: NaiveDate) -> Option<Waiver> {
        self.waivers.get(&date).cloned()
    }

    fn first_punch_date(&self, start: NaiveDate) -> AppResult<Option<NaiveDate>> {
        Ok(self.punches.keys().find(|d| **d >= start).copied())
    }
}
