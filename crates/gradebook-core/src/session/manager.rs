use tracing::info;

use crate::config::Config;
use crate::course::{CourseRecord, Deletion, GradeUpdate, RecordStore, validate_grade};
use crate::error::Result;
use crate::history::{HistoryEntry, HistoryStack};
use crate::review::ReviewQueue;
use crate::search::{binary_search_by_name, linear_search};
use crate::sort::{sort_by_grade_desc, sort_by_name_asc};
use crate::stats::{PassFailCounts, Summary, average, pass_fail_counts};

/// Owns all state for one interactive session.
///
/// Mutations that are logged (grade updates, deletions) apply the store
/// change and the history push together; a failed call changes nothing.
#[derive(Debug, Default)]
pub struct Gradebook {
    config: Config,
    store: RecordStore,
    history: HistoryStack,
    review: ReviewQueue,
}

impl Gradebook {
    pub fn new(config: Config) -> Self {
        info!(
            "Starting gradebook session (pass threshold {})",
            config.pass_threshold
        );
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn review_queue(&mut self) -> &mut ReviewQueue {
        &mut self.review
    }

    pub fn ensure_registrable<'a>(&self, name: &'a str) -> Result<&'a str> {
        self.store.ensure_registrable(name)
    }

    pub fn register(&mut self, name: &str, grade: f64) -> Result<&CourseRecord> {
        self.store.register(name, grade)
    }

    /// Register with a raw, not yet validated grade.
    pub fn register_input(&mut self, name: &str, grade_input: &str) -> Result<&CourseRecord> {
        self.store.ensure_registrable(name)?;
        let grade = validate_grade(grade_input)?;
        self.store.register(name, grade)
    }

    pub fn find_exact(&self, name: &str) -> Option<&CourseRecord> {
        self.store.find_exact(name)
    }

    pub fn linear_search(&self, query: &str) -> Vec<&CourseRecord> {
        linear_search(&self.store, query)
    }

    pub fn binary_search_by_name(&self, query: &str) -> Result<&CourseRecord> {
        binary_search_by_name(&self.store, query)
    }

    pub fn update_grade(&mut self, name: &str, new_grade_input: &str) -> Result<GradeUpdate> {
        let update = self.store.update_grade(name, new_grade_input)?;
        self.history.push(HistoryEntry::updated(&update));
        Ok(update)
    }

    pub fn delete(&mut self, name: &str, confirmed: bool) -> Result<Deletion> {
        let deletion = self.store.delete(name, confirmed)?;
        if let Deletion::Removed(record) = &deletion {
            self.history.push(HistoryEntry::deleted(record));
        }
        Ok(deletion)
    }

    pub fn sort_by_grade_desc(&self) -> Vec<CourseRecord> {
        sort_by_grade_desc(self.store.snapshot())
    }

    pub fn sort_by_name_asc(&self) -> Vec<CourseRecord> {
        sort_by_name_asc(self.store.snapshot())
    }

    pub fn average(&self) -> Result<f64> {
        average(&self.store)
    }

    pub fn pass_fail_counts(&self) -> Result<PassFailCounts> {
        pass_fail_counts(&self.store, self.config.pass_threshold)
    }

    pub fn summary(&self) -> Result<Summary> {
        Summary::collect(&self.store, self.config.pass_threshold)
    }
}
