//! Historical entry store: a date-keyed mapping from day to either a punch
//! sequence or a waiver record.
//!
//! The engine only ever reads through the `TimeStore` trait, injected at the
//! call site, so balances can be computed against SQLite, the in-memory test
//! store, or anything else that honours the contract.

pub mod initialize;
pub mod memory;
pub mod pool;
pub mod queries;
pub mod sqlite;

use crate::errors::AppResult;
use crate::models::Waiver;
use chrono::NaiveDate;

pub use memory::MemStore;
pub use sqlite::SqliteStore;

/// Read contract the engine depends on.
///
/// `punches`/`waiver` are mirror lookups and infallible; `first_punch_date`
/// may touch the backing store and is the engine's only fallible input.
pub trait TimeStore {
    /// Raw punch sequence recorded for `date`, if any.
    fn punches(&self, date: NaiveDate) -> Option<Vec<String>>;

    /// Waiver in effect for `date`, if any. Takes precedence over punches.
    fn waiver(&self, date: NaiveDate) -> Option<Waiver>;

    /// Earliest punch-entry date on or after `start`.
    fn first_punch_date(&self, start: NaiveDate) -> AppResult<Option<NaiveDate>>;
}
