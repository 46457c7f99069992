use std::cmp::Ordering;

use tracing::debug;

use crate::course::{CourseRecord, RecordStore};
use crate::error::{Error, Result};

/// Whether the store is in ascending case-insensitive name order.
pub fn is_sorted_by_name(store: &RecordStore) -> bool {
    store
        .records()
        .windows(2)
        .all(|pair| pair[0].key() <= pair[1].key())
}

/// Exact, case-insensitive lookup by bisecting the live store.
///
/// The store must already be in name order; it is never sorted here. An
/// unsorted store fails with `PreconditionNotSorted` whatever the query.
pub fn binary_search_by_name<'a>(store: &'a RecordStore, query: &str) -> Result<&'a CourseRecord> {
    if !is_sorted_by_name(store) {
        return Err(Error::PreconditionNotSorted);
    }

    let records = store.records();
    let target = query.trim().to_lowercase();
    let mut low = 0;
    let mut high = records.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match records[mid].key().cmp(&target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => {
                debug!("Binary search found {:?} at index {}", records[mid].name, mid);
                return Ok(&records[mid]);
            }
        }
    }

    Err(Error::NotFound(query.trim().to_string()))
}
