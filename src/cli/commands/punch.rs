use crate::config::Config;
use crate::core::balance::{calculate_leave_by, clamp_leave_by};
use crate::core::logic::Core;
use crate::core::sequence::validate_times;
use crate::errors::{AppError, AppResult};
use crate::store::{SqliteStore, TimeStore};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::iso_date_str;
use crate::utils::time::hour_min_formatted;
use chrono::Timelike;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let now = chrono::Local::now();
    let today = now.date_naive();
    let schedule = cfg.schedule();

    let mut store = SqliteStore::open(&cfg.database)?;

    if store.waiver(today).is_some() {
        return Err(AppError::DayIsWaived(iso_date_str(today)));
    }
    if !schedule.is_working_day(today) {
        warning(format!("{} is not a working day, nothing punched", today));
        return Ok(());
    }

    let value = hour_min_formatted(now.hour(), now.minute());
    let mut values = store.punches(today).unwrap_or_default();
    values.push(value.clone());
    let validated = validate_times(&values, true);
    store.set_punches(today, validated)?;

    let summary = Core::build_day_summary(today, &schedule, &store);
    success(format!("Punched {}", value));

    match &summary.total {
        Some(total) => info(format!("Day total: {}", total)),
        None => {
            let leave_by = clamp_leave_by(&calculate_leave_by(&summary.values, &schedule.hours_per_day));
            info(format!("Leave by: {}", leave_by));
        }
    }
    Ok(())
}
