use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sequence::SENTINEL;
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStore;
use crate::ui::messages::success;
use crate::utils::date::iso_date_str;
use crate::utils::time::{validate_date, validate_time};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Interchange record, one per stored day. The JSON shape matches the
/// historical export format, so old files import cleanly.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExportEntry {
    Flexible {
        date: String,
        values: Vec<String>,
    },
    Waived {
        date: String,
        data: String,
        hours: String,
    },
}

impl ExportEntry {
    /// Shape and semantic validation of an imported entry: a real calendar
    /// date, and every time either valid or the placeholder.
    pub fn is_valid(&self) -> bool {
        match self {
            ExportEntry::Flexible { date, values } => {
                validate_date(date)
                    && values.iter().all(|v| validate_time(v) || v == SENTINEL)
            }
            ExportEntry::Waived { date, hours, .. } => {
                validate_date(date) && validate_time(hours)
            }
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, format } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let entries = collect_entries(&store);

        match format {
            ExportFormat::Json => write_json(file, &entries)?,
            ExportFormat::Csv => write_csv(file, &entries)?,
        }
        success(format!("Exported {} entries to {}", entries.len(), file));
    }
    Ok(())
}

fn collect_entries(store: &SqliteStore) -> Vec<ExportEntry> {
    let mut entries: Vec<ExportEntry> = store
        .all_punches()
        .map(|(date, values)| ExportEntry::Flexible {
            date: iso_date_str(*date),
            values: values.clone(),
        })
        .collect();

    entries.extend(store.all_waivers().map(|(date, waiver)| ExportEntry::Waived {
        date: iso_date_str(*date),
        data: waiver.reason.clone(),
        hours: waiver.hours.clone(),
    }));

    entries
}

fn write_json(path: &str, entries: &[ExportEntry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

fn write_csv(path: &str, entries: &[ExportEntry]) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(e.to_string()))?;
    writer
        .write_record(["type", "date", "reason", "hours", "values"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for entry in entries {
        let record = match entry {
            ExportEntry::Flexible { date, values } => [
                "flexible".to_string(),
                date.clone(),
                String::new(),
                String::new(),
                values.join(" "),
            ],
            ExportEntry::Waived { date, data, hours } => [
                "waived".to_string(),
                date.clone(),
                data.clone(),
                hours.clone(),
                String::new(),
            ],
        };
        writer
            .write_record(&record)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
