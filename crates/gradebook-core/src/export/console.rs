//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::course::{CourseRecord, display_grade};
use crate::history::HistoryEntry;
use crate::stats::PassFailCounts;

/// Format a grade, green when passed and red when failed.
pub fn format_colored_grade(grade: f64, pass_threshold: f64, color: bool) -> String {
    let text = display_grade(grade);
    if !color {
        return text;
    }
    if grade >= pass_threshold {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// `Math - Grade: 75.0`
pub fn format_course(record: &CourseRecord, pass_threshold: f64, color: bool) -> String {
    let name = if color {
        record.name.bold().to_string()
    } else {
        record.name.clone()
    };
    format!(
        "{} - Grade: {}",
        name,
        format_colored_grade(record.grade, pass_threshold, color)
    )
}

/// Numbered listing, one course per line, starting at 1.
pub fn format_course_list<'a, I>(records: I, pass_threshold: f64, color: bool) -> String
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut output = String::new();
    for (i, record) in records.into_iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {}",
            i + 1,
            format_course(record, pass_threshold, color)
        );
    }
    output
}

/// Average to two decimal places.
pub fn format_average(average: f64) -> String {
    format!("Overall average: {:.2}", average)
}

pub fn format_pass_fail(counts: &PassFailCounts, color: bool) -> String {
    let (passed, failed) = if color {
        (
            counts.passed.green().to_string(),
            counts.failed.red().to_string(),
        )
    } else {
        (counts.passed.to_string(), counts.failed.to_string())
    };
    format!("Courses passed: {}\nCourses failed: {}", passed, failed)
}

/// Numbered history, newest first, with the time each change was made.
pub fn format_history<'a, I>(entries: I, color: bool) -> String
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    let mut output = String::new();
    for (i, entry) in entries.into_iter().enumerate() {
        let time = entry.recorded_at().format("%H:%M:%S").to_string();
        let time = if color {
            time.dimmed().to_string()
        } else {
            time
        };
        let _ = writeln!(output, "{}. {} ({})", i + 1, entry, time);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ChangeKind;

    #[test]
    fn test_format_course_plain() {
        let record = CourseRecord::new("Math", 75.0);
        assert_eq!(format_course(&record, 60.0, false), "Math - Grade: 75.0");
    }

    #[test]
    fn test_format_course_list_numbering() {
        let records = vec![
            CourseRecord::new("Math", 75.0),
            CourseRecord::new("Art", 59.5),
        ];
        assert_eq!(
            format_course_list(&records, 60.0, false),
            "1. Math - Grade: 75.0\n2. Art - Grade: 59.5\n"
        );
        assert_eq!(format_course_list(Vec::<CourseRecord>::new().iter(), 60.0, false), "");
    }

    #[test]
    fn test_colored_grade_has_ansi_codes() {
        let colored = format_colored_grade(80.0, 60.0, true);
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("80.0"));
        assert_eq!(format_colored_grade(80.0, 60.0, false), "80.0");
    }

    #[test]
    fn test_format_average_two_decimals() {
        assert_eq!(format_average(73.333_333), "Overall average: 73.33");
        assert_eq!(format_average(60.0), "Overall average: 60.00");
    }

    #[test]
    fn test_format_pass_fail_plain() {
        let counts = PassFailCounts {
            passed: 2,
            failed: 1,
        };
        assert_eq!(
            format_pass_fail(&counts, false),
            "Courses passed: 2\nCourses failed: 1"
        );
    }

    #[test]
    fn test_format_history() {
        let entries = [
            HistoryEntry::new(ChangeKind::Delete, "newest"),
            HistoryEntry::new(ChangeKind::Update, "oldest"),
        ];
        let output = format_history(&entries, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. newest ("));
        assert!(lines[1].starts_with("2. oldest ("));
    }
}
