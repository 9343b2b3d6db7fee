pub mod day_summary;
pub mod schedule;
pub mod waiver;

pub use day_summary::DaySummary;
pub use schedule::WorkSchedule;
pub use waiver::Waiver;
