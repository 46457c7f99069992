//! Display-only sorting.
//!
//! Both algorithms take ownership of a snapshot and return it reordered.
//! The live [`RecordStore`](crate::course::RecordStore) is never touched.
//! - `sort_by_grade_desc` - bubble sort, highest grade first
//! - `sort_by_name_asc` - insertion sort, case-insensitive name order

mod bubble;
mod insertion;

pub use bubble::*;
pub use insertion::*;
