use crate::utils::time::hhmm_to_minutes;
use chrono::{Datelike, NaiveDate};

/// Work-schedule configuration the engine computes against.
/// `working_days` is indexed 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone)]
pub struct WorkSchedule {
    pub working_days: [bool; 7],
    pub hours_per_day: String,
    pub count_today: bool,
    pub balance_start_date: NaiveDate,
}

impl WorkSchedule {
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_days[date.weekday().num_days_from_sunday() as usize]
    }

    pub fn hours_per_day_minutes(&self) -> i64 {
        hhmm_to_minutes(&self.hours_per_day).unwrap_or(0)
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            // Monday through Friday
            working_days: [false, true, true, true, true, true, false],
            hours_per_day: "08:00".to_string(),
            count_today: false,
            balance_start_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        }
    }
}
