pub mod config;
pub mod course;
pub mod error;
pub mod export;
pub mod history;
pub mod review;
pub mod search;
pub mod session;
pub mod sort;
pub mod stats;

pub use config::Config;
pub use course::{CourseRecord, Deletion, GradeUpdate, RecordStore, validate_grade};
pub use error::{Error, Result};
pub use history::{ChangeKind, HistoryEntry, HistoryStack};
pub use review::{Intake, ReviewQueue};
pub use search::{binary_search_by_name, is_sorted_by_name, linear_search};
pub use session::Gradebook;
pub use sort::{sort_by_grade_desc, sort_by_name_asc};
pub use stats::{PassFailCounts, Summary, average, pass_fail_counts};
