use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::sequence::validate_times;
use crate::errors::{AppError, AppResult};
use crate::store::{SqliteStore, TimeStore};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, times } = cmd {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let mut store = SqliteStore::open(&cfg.database)?;

        if store.waiver(day).is_some() {
            return Err(AppError::DayIsWaived(date.clone()));
        }

        // Invalid entries become the sentinel; a fully-invalid sequence
        // removes the day instead of storing placeholders.
        let validated = validate_times(times, true);
        if validated.is_empty() {
            store.remove_punches(day)?;
            warning(format!("No valid times given, removed entry for {}", day));
            return Ok(());
        }

        store.set_punches(day, validated)?;

        let summary = Core::build_day_summary(day, &cfg.schedule(), &store);
        match &summary.total {
            Some(total) => success(format!("{}: {} -> total {}", day, summary.values.join(" "), total)),
            None => success(format!("{}: {} (day still open)", day, summary.values.join(" "))),
        }
        if summary.has_error {
            warning("Entries are not in increasing order or leave gaps");
        }
    }
    Ok(())
}
