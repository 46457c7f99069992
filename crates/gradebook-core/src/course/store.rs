use tracing::debug;

use crate::course::record::CourseRecord;
use crate::course::validation::{validate_grade, validate_range};
use crate::error::{Error, Result};

/// A grade change applied by [`RecordStore::update_grade`].
#[derive(Debug, Clone, PartialEq)]
pub struct GradeUpdate {
    pub name: String,
    pub previous: f64,
    pub current: f64,
}

/// Outcome of [`RecordStore::delete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Deletion {
    Removed(CourseRecord),
    Cancelled,
}

/// Insertion-ordered roster of courses.
///
/// Names are unique under case-insensitive comparison and every stored
/// grade lies within the grade scale.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CourseRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// Copy of the records in insertion order.
    pub fn snapshot(&self) -> Vec<CourseRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check that `name` could be registered, returning it trimmed.
    pub fn ensure_registrable<'a>(&self, name: &'a str) -> Result<&'a str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.find_exact(name).is_some() {
            return Err(Error::DuplicateName(name.to_string()));
        }
        Ok(name)
    }

    pub fn register(&mut self, name: &str, grade: f64) -> Result<&CourseRecord> {
        let name = self.ensure_registrable(name)?;
        let grade = validate_range(grade)?;

        debug!("Registering course {:?} with grade {}", name, grade);
        self.records.push(CourseRecord::new(name, grade));
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn find_exact(&self, name: &str) -> Option<&CourseRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    /// All records whose name contains `query`, ignoring case, in store order.
    pub fn find_substring(&self, query: &str) -> Vec<&CourseRecord> {
        self.records
            .iter()
            .filter(|record| record.name_contains(query))
            .collect()
    }

    /// Replace the grade of `name` with validated `new_grade_input`.
    ///
    /// The lookup runs before validation, so a missing course is reported
    /// as `NotFound` even when the input is also invalid.
    pub fn update_grade(&mut self, name: &str, new_grade_input: &str) -> Result<GradeUpdate> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::NotFound(name.trim().to_string()))?;
        let grade = validate_grade(new_grade_input)?;

        let record = &mut self.records[index];
        let update = GradeUpdate {
            name: record.name.clone(),
            previous: record.grade,
            current: grade,
        };
        record.grade = grade;

        debug!(
            "Updated {:?}: {} -> {}",
            update.name, update.previous, update.current
        );
        Ok(update)
    }

    pub fn delete(&mut self, name: &str, confirmed: bool) -> Result<Deletion> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::NotFound(name.trim().to_string()))?;

        if !confirmed {
            debug!("Deletion of {:?} cancelled", self.records[index].name);
            return Ok(Deletion::Cancelled);
        }

        let removed = self.records.remove(index);
        debug!("Deleted {:?} (grade {})", removed.name, removed.grade);
        Ok(Deletion::Removed(removed))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.records.iter().position(|r| r.name_matches(name))
    }
}
