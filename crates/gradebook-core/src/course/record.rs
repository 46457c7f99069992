use serde::{Deserialize, Serialize};

/// A registered course and the grade obtained in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub grade: f64,
}

impl CourseRecord {
    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    /// Lowercased name used for every name comparison.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.key() == name.to_lowercase()
    }

    pub fn name_contains(&self, query: &str) -> bool {
        self.key().contains(&query.to_lowercase())
    }

    pub fn passed(&self, threshold: f64) -> bool {
        self.grade >= threshold
    }
}

/// Render a grade the way the roster shows it: whole numbers keep one
/// decimal place (`75.0`), fractional grades print as-is (`72.25`).
pub fn display_grade(grade: f64) -> String {
    if grade.fract() == 0.0 {
        format!("{:.1}", grade)
    } else {
        grade.to_string()
    }
}
