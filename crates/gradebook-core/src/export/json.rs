use serde::Serialize;

use crate::course::CourseRecord;
use crate::error::Result;
use crate::session::Gradebook;
use crate::stats::Summary;

#[derive(Debug, Serialize)]
struct RosterExport<'a> {
    courses: &'a [CourseRecord],
    /// Absent when no courses are registered.
    summary: Option<Summary>,
}

/// Pretty-printed JSON of the roster in insertion order plus its summary.
pub fn format_roster_json(book: &Gradebook) -> Result<String> {
    let export = RosterExport {
        courses: book.store().records(),
        summary: book.summary().ok(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
