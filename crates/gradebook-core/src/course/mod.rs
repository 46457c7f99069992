//! Course records and the record store.
//!
//! - `CourseRecord` - a course name with its grade
//! - `RecordStore` - insertion-ordered roster with case-insensitive unique names
//! - `validate_grade` - parse and range-check raw grade input

mod record;
mod store;
mod validation;

pub use record::*;
pub use store::*;
pub use validation::*;
