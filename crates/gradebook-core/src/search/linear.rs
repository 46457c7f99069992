use crate::course::{CourseRecord, RecordStore};

/// Every record whose name contains `query`, ignoring case, in store order.
pub fn linear_search<'a>(store: &'a RecordStore, query: &str) -> Vec<&'a CourseRecord> {
    store.find_substring(query.trim())
}
