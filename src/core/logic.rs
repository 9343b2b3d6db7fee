use crate::core::balance::day_balance;
use crate::core::day_total::day_total;
use crate::core::sequence::has_input_error;
use crate::models::{DaySummary, WorkSchedule};
use crate::store::TimeStore;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Assembles the full per-day picture consumed by `list` and `balance`.
    pub fn build_day_summary(
        date: NaiveDate,
        schedule: &WorkSchedule,
        store: &dyn TimeStore,
    ) -> DaySummary {
        let values = store.punches(date).unwrap_or_default();
        let waiver = store.waiver(date);
        let total = day_total(date, store);
        let balance = total
            .as_deref()
            .and_then(|t| day_balance(t, &schedule.hours_per_day));

        DaySummary {
            date,
            has_error: waiver.is_none() && has_input_error(&values),
            values,
            waiver,
            total,
            balance,
        }
    }
}
