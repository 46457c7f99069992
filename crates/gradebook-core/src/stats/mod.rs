//! Aggregate statistics over the roster.

use serde::Serialize;

use crate::course::RecordStore;
use crate::error::{Error, Result};

/// Courses at or above the pass threshold versus below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassFailCounts {
    pub passed: usize,
    pub failed: usize,
}

/// Roster-wide figures, as shown by the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub courses: usize,
    pub average: f64,
    pub passed: usize,
    pub failed: usize,
    pub pass_threshold: f64,
}

impl Summary {
    pub fn collect(store: &RecordStore, pass_threshold: f64) -> Result<Self> {
        let counts = pass_fail_counts(store, pass_threshold)?;
        Ok(Self {
            courses: store.len(),
            average: average(store)?,
            passed: counts.passed,
            failed: counts.failed,
            pass_threshold,
        })
    }
}

/// Arithmetic mean of every grade. No rounding is applied.
pub fn average(store: &RecordStore) -> Result<f64> {
    if store.is_empty() {
        return Err(Error::EmptyStore);
    }
    let total: f64 = store.records().iter().map(|r| r.grade).sum();
    Ok(total / store.len() as f64)
}

pub fn pass_fail_counts(store: &RecordStore, pass_threshold: f64) -> Result<PassFailCounts> {
    if store.is_empty() {
        return Err(Error::EmptyStore);
    }
    let passed = store
        .records()
        .iter()
        .filter(|r| r.passed(pass_threshold))
        .count();
    Ok(PassFailCounts {
        passed,
        failed: store.len() - passed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::grade::PASS_THRESHOLD;

    fn sample() -> RecordStore {
        let mut store = RecordStore::new();
        store.register("A", 80.0).unwrap();
        store.register("B", 60.0).unwrap();
        store.register("C", 40.0).unwrap();
        store
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&sample()).unwrap(), 60.0);
    }

    #[test]
    fn test_average_is_unrounded() {
        let mut store = RecordStore::new();
        store.register("A", 70.0).unwrap();
        store.register("B", 75.0).unwrap();
        store.register("C", 75.0).unwrap();
        let avg = average(&store).unwrap();
        assert!((avg - 73.333_333_333).abs() < 1e-6);
    }

    #[test]
    fn test_pass_fail_counts() {
        let counts = pass_fail_counts(&sample(), PASS_THRESHOLD).unwrap();
        assert_eq!(
            counts,
            PassFailCounts {
                passed: 2,
                failed: 1
            }
        );
    }

    #[test]
    fn test_custom_threshold() {
        let counts = pass_fail_counts(&sample(), 70.0).unwrap();
        assert_eq!(counts.passed, 1);
        assert_eq!(counts.failed, 2);
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert!(matches!(average(&store), Err(Error::EmptyStore)));
        assert!(matches!(
            pass_fail_counts(&store, PASS_THRESHOLD),
            Err(Error::EmptyStore)
        ));
        assert!(matches!(
            Summary::collect(&store, PASS_THRESHOLD),
            Err(Error::EmptyStore)
        ));
    }

    #[test]
    fn test_summary() {
        let summary = Summary::collect(&sample(), PASS_THRESHOLD).unwrap();
        assert_eq!(summary.courses, 3);
        assert_eq!(summary.average, 60.0);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
    }
}
