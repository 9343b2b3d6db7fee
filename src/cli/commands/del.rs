use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStore;
use crate::ui::messages::info;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date } = cmd {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let mut store = SqliteStore::open(&cfg.database)?;

        if !store.remove_punches(day)? {
            return Err(AppError::NoEntryForDate(date.clone()));
        }
        info(format!("Deleted all punches for {}", day));
    }
    Ok(())
}
