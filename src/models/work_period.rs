use super::work_day::WorkDay;
use chrono::{DateTime, Duration, Local};

/// One start/stop interval inside a work day.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkPeriod {
    pub id: i64,                               // ⇔ work_periods.id (0 = not persisted yet)
    pub work_day_id: i64,                      // ⇔ work_periods.work_day_id
    pub start_at: DateTime<Local>,             // ⇔ work_periods.start_at
    pub end_at: Option<DateTime<Local>>,       // ⇔ work_periods.end_at (NULL = open)
    pub note: Option<String>,                  // ⇔ work_periods.note
    pub created_at: Option<DateTime<Local>>,   // ⇔ work_periods.created_at
    pub updated_at: Option<DateTime<Local>>,   // ⇔ work_periods.updated_at
}

impl WorkPeriod {
    /// A new, unsaved period of `work_day` starting at `now`.
    pub fn new(work_day: &WorkDay, now: DateTime<Local>) -> Self {
        Self {
            id: 0,
            work_day_id: work_day.id,
            start_at: now,
            end_at: None,
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Close the period. `None` is a no-op: an open period stays open.
    pub fn set_end_at(&mut self, end_at: Option<DateTime<Local>>) {
        if let Some(t) = end_at {
            self.end_at = Some(t);
        }
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    pub fn is_open(&self) -> bool {
        self.end_at.is_none()
    }

    /// `end - start` for a closed period, zero while it is still open.
    pub fn time_worked(&self) -> Duration {
        match self.end_at {
            Some(end) => end - self.start_at,
            None => Duration::zero(),
        }
    }
}
