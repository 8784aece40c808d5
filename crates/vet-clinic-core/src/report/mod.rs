//! Text and JSON reports over registry contents.

mod detail;
mod summary;

pub use detail::{owner_name, validate_date_format, ReportFormatter, DEFAULT_DATE_FORMAT};
pub use summary::{ClinicSummary, TaskBreakdown};
