use crate::cli::commands::export::ExportEntry;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Waiver;
use crate::store::SqliteStore;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let content = fs::read_to_string(file)?;
        let raw: Vec<serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| AppError::Import(format!("{} is not a valid export file: {}", file, e)))?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut imported = 0usize;
        let mut failed = 0usize;

        for value in raw {
            let entry = match serde_json::from_value::<ExportEntry>(value) {
                Ok(entry) if entry.is_valid() => entry,
                _ => {
                    failed += 1;
                    continue;
                }
            };

            match entry {
                ExportEntry::Flexible { date, values } => {
                    // is_valid() guarantees the date parses
                    let day = parse_date(&date).unwrap();
                    store.set_punches(day, values)?;
                }
                ExportEntry::Waived { date, data, hours } => {
                    let day = parse_date(&date).unwrap();
                    store.set_waiver(day, Waiver::new(&data, &hours))?;
                }
            }
            imported += 1;
        }

        success(format!("Imported {} entries from {}", imported, file));
        if failed > 0 {
            warning(format!("Skipped {} invalid entries", failed));
        }
    }
    Ok(())
}
