use crate::models::waiver::Waiver;
use chrono::NaiveDate;

/// Everything `list` and `balance` need to render one day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub values: Vec<String>,
    pub waiver: Option<Waiver>,
    pub total: Option<String>,
    pub balance: Option<String>,
    pub has_error: bool,
}
