use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::store::SqliteStore;
use crate::utils::date;
use crate::utils::formatting::{colored_balance, pad_left, pad_right};
use crate::utils::time::{format_minutes, hhmm_to_minutes};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now, all } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let schedule = cfg.schedule();

        let dates = if *now {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        let mut shown = 0usize;
        let mut worked_minutes = 0i64;

        for d in dates {
            let summary = Core::build_day_summary(d, &schedule, &store);
            let has_data = !summary.values.is_empty() || summary.waiver.is_some();
            if !*all && !has_data && !schedule.is_working_day(d) {
                continue;
            }

            print_row(&summary);
            shown += 1;
            if let Some(mins) = summary.total.as_deref().and_then(hhmm_to_minutes) {
                worked_minutes += mins;
            }
        }

        if shown == 0 {
            println!("No days to show for this period");
        } else {
            println!(
                "\nTotal worked: {} over {} day(s)",
                format_minutes(worked_minutes),
                shown
            );
        }
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.splitn(2, ':').collect();
            return date::generate_range(parts[0], parts[1]);
        }
        return date::generate_from_period(p);
    }

    // default: current month
    let today = date::today();
    Ok(date::all_days_of_month(today.year(), today.month()))
}

fn print_row(summary: &DaySummary) {
    let weekday = summary.date.format("%a").to_string();
    let punches = if summary.values.is_empty() {
        "-".to_string()
    } else {
        summary.values.join(" ")
    };

    let total = summary.total.clone().unwrap_or_else(|| "--:--".to_string());
    let balance = summary
        .balance
        .as_deref()
        .map(colored_balance)
        .unwrap_or_else(|| "     ".to_string());

    let note = if let Some(w) = &summary.waiver {
        if w.reason.is_empty() {
            "waived".to_string()
        } else {
            format!("waived: {}", w.reason)
        }
    } else if summary.has_error {
        "entry error".to_string()
    } else {
        String::new()
    };

    println!(
        "{} {}  {}  {} {}  {}",
        summary.date,
        weekday,
        pad_right(&punches, 36),
        pad_left(&total, 6),
        pad_left(&balance, 6),
        note
    );
}
