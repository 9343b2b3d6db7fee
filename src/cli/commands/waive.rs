use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Waiver;
use crate::store::{SqliteStore, TimeStore};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;
use crate::utils::time::{is_negative, validate_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Waive {
        date,
        reason,
        hours,
        remove,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let mut store = SqliteStore::open(&cfg.database)?;

        if *remove {
            if store.remove_waiver(day)? {
                success(format!("Removed waiver for {}", day));
            } else {
                warning(format!("No waiver found for {}", day));
            }
            return Ok(());
        }

        let hours = hours.clone().unwrap_or_else(|| cfg.hours_per_day.clone());
        if !validate_time(&hours) || is_negative(&hours) {
            return Err(AppError::InvalidTime(hours));
        }

        store.set_waiver(day, Waiver::new(reason, &hours))?;
        success(format!("Waived {} ({} credited)", day, hours));

        if store.punches(day).is_some() {
            warning("Day also has punch entries; the waiver takes precedence");
        }
    }
    Ok(())
}
