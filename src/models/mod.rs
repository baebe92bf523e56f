pub mod work_day;
pub mod work_period;

pub use work_day::WorkDay;
pub use work_period::WorkPeriod;
