use serde::{Deserialize, Serialize};

/// A waived workday: the day is fully accounted for with a fixed hour
/// credit (holiday, PTO, sick leave), bypassing punch computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waiver {
    pub reason: String,
    pub hours: String,
}

impl Waiver {
    pub fn new(reason: &str, hours: &str) -> Self {
        Self {
            reason: reason.to_string(),
            hours: hours.to_string(),
        }
    }
}
