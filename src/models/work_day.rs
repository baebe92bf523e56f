use super::work_period::WorkPeriod;
use crate::utils::time::truncate_to_minute;
use chrono::{DateTime, Duration, Local, NaiveDate};

/// 7h30m
pub const DEFAULT_DAY_LENGTH_MINS: i64 = 450;

/// One tracked calendar day.
///
/// Periods are not loaded with the row: callers attach them with
/// [`WorkDay::set_work_periods`] before asking for derived times.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDay {
    pub id: i64,                             // ⇔ work_days.id (0 = not persisted yet)
    pub date: NaiveDate,                     // ⇔ work_days.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub length_mins: i64,                    // ⇔ work_days.length_mins
    pub note: Option<String>,                // ⇔ work_days.note
    pub created_at: Option<DateTime<Local>>, // ⇔ work_days.created_at
    pub updated_at: Option<DateTime<Local>>, // ⇔ work_days.updated_at

    work_periods: Vec<WorkPeriod>,
}

impl WorkDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: 0,
            date,
            length_mins: DEFAULT_DAY_LENGTH_MINS,
            note: None,
            created_at: None,
            updated_at: None,
            work_periods: Vec::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    /// Target length, kept in whole minutes.
    pub fn set_length(&mut self, length: Duration) {
        self.length_mins = length.num_minutes();
    }

    pub fn length(&self) -> Duration {
        Duration::minutes(self.length_mins)
    }

    pub fn set_work_periods(&mut self, periods: Vec<WorkPeriod>) {
        self.work_periods = periods;
    }

    pub fn work_periods(&self) -> &[WorkPeriod] {
        &self.work_periods
    }

    pub fn has_open_period(&self) -> bool {
        self.work_periods.iter().any(WorkPeriod::is_open)
    }

    /// Sum of the loaded periods. Open periods count as zero.
    pub fn time_worked(&self) -> Duration {
        self.work_periods
            .iter()
            .fold(Duration::zero(), |acc, wp| acc + wp.time_worked())
    }

    /// Negative once the target length has been exceeded.
    pub fn time_remaining(&self) -> Duration {
        self.length() - self.time_worked()
    }

    pub fn estimated_finish(&self, now: &DateTime<Local>) -> DateTime<Local> {
        truncate_to_minute(now) + self.time_remaining()
    }
}
