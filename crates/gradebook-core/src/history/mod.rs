//! Change history.
//!
//! An append-only log of grade updates and course deletions, read back
//! newest first.

use chrono::{DateTime, Local};
use serde::Serialize;
use strum::IntoStaticStr;

use crate::course::{CourseRecord, GradeUpdate, display_grade};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
pub enum ChangeKind {
    #[strum(serialize = "update")]
    Update,
    #[strum(serialize = "delete")]
    Delete,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A recorded change. Entries are never edited once pushed.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    kind: ChangeKind,
    description: String,
    recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(kind: ChangeKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            recorded_at: Local::now(),
        }
    }

    pub fn updated(update: &GradeUpdate) -> Self {
        Self::new(
            ChangeKind::Update,
            format!(
                "Updated: {} - previous grade: {} -> new grade: {}",
                update.name,
                display_grade(update.previous),
                display_grade(update.current)
            ),
        )
    }

    pub fn deleted(record: &CourseRecord) -> Self {
        Self::new(
            ChangeKind::Delete,
            format!(
                "Deleted: {} - grade: {}",
                record.name,
                display_grade(record.grade)
            ),
        )
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recorded_at(&self) -> DateTime<Local> {
        self.recorded_at
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Entries in reverse push order. The stack itself is left untouched.
    pub fn view_most_recent_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut history = HistoryStack::new();
        history.push(HistoryEntry::new(ChangeKind::Update, "first"));
        history.push(HistoryEntry::new(ChangeKind::Delete, "second"));
        history.push(HistoryEntry::new(ChangeKind::Update, "third"));

        let view: Vec<&str> = history
            .view_most_recent_first()
            .map(|e| e.description())
            .collect();
        assert_eq!(view, ["third", "second", "first"]);
        // Viewing does not consume.
        assert_eq!(history.len(), 3);
        assert_eq!(history.view_most_recent_first().count(), 3);
    }

    #[test]
    fn test_entry_text() {
        let update = GradeUpdate {
            name: "Math".to_string(),
            previous: 55.0,
            current: 72.5,
        };
        let entry = HistoryEntry::updated(&update);
        assert_eq!(entry.kind(), ChangeKind::Update);
        assert!(entry.description().contains("Math"));
        assert!(entry.description().contains("55.0"));
        assert!(entry.description().contains("72.5"));

        let entry = HistoryEntry::deleted(&CourseRecord::new("Art", 91.0));
        assert_eq!(entry.kind().as_str(), "delete");
        assert_eq!(entry.to_string(), "Deleted: Art - grade: 91.0");
    }

    #[test]
    fn test_empty_history() {
        let history = HistoryStack::new();
        assert!(history.is_empty());
        assert_eq!(history.view_most_recent_first().count(), 0);
    }
}
