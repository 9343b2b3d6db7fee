use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::balance::{
    all_time_balance, all_time_balance_target, calculate_leave_by, clamp_leave_by, day_balance,
    month_balance,
};
use crate::core::day_total::day_total;
use crate::errors::{AppError, AppResult};
use crate::store::{SqliteStore, TimeStore};
use crate::utils::date::{parse_date, today};
use crate::utils::formatting::colored_balance;
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { month } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let schedule = cfg.schedule();
        let now = today();

        let displayed = resolve_month(month, now)?;
        let is_current_month =
            displayed.year() == now.year() && displayed.month() == now.month();

        let monthly = month_balance(displayed.year(), displayed.month(), now, &schedule, &store);
        println!(
            "Month balance ({}):    {}",
            displayed.format("%Y-%m"),
            colored_balance(&monthly)
        );

        let target = all_time_balance_target(displayed, now, schedule.count_today);
        let overall = all_time_balance(target, &schedule, &store)?;
        println!("All-time balance:        {}", colored_balance(&overall));

        if is_current_month && schedule.is_working_day(now) && store.waiver(now).is_none() {
            let values = store.punches(now).unwrap_or_default();

            match day_total(now, &store) {
                Some(total) => {
                    if let Some(balance) = day_balance(&total, &schedule.hours_per_day) {
                        println!(
                            "Today: total {}, balance {}",
                            total,
                            colored_balance(&balance)
                        );
                    }
                }
                None => {
                    let leave_by =
                        clamp_leave_by(&calculate_leave_by(&values, &schedule.hours_per_day));
                    println!("Leave by:                {}", leave_by);
                }
            }
        }
    }
    Ok(())
}

/// `YYYY-MM` to the first day of that month; current month when omitted.
fn resolve_month(month: &Option<String>, now: NaiveDate) -> AppResult<NaiveDate> {
    match month {
        None => Ok(now),
        Some(m) => parse_date(&format!("{}-01", m))
            .ok_or_else(|| AppError::InvalidPeriod(m.clone())),
    }
}
