pub mod calendar;
pub mod hours;
pub mod selector;
pub mod sheet;

pub use hours::{HourPolicy, BLACKOUT_HOURS};
pub use selector::{HourSelection, TimeRangeSelector};
pub use sheet::DateTimeSheet;
