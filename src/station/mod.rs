mod notes;
mod record;

pub use notes::{extract_count, sum_digit_runs};
pub use record::{parse_count, StationRecord};
