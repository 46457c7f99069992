//! Register, list, update and delete courses.

use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::course::display_grade;
use gradebook_core::export::{format_colored_grade, format_course_list};
use gradebook_core::{Deletion, Error, Gradebook};

use super::{header, report_error, roster_is_empty};
use crate::prompter::Prompter;

pub fn register<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "REGISTER NEW COURSE")?;

    let Some(name) = io.ask("Course name: ")? else {
        return Ok(());
    };
    if let Err(e) = book.ensure_registrable(&name) {
        return report_error(io, &e);
    }

    let Some(grade_input) = io.ask("Grade obtained: ")? else {
        return Ok(());
    };
    let color = book.config().color;
    let threshold = book.config().pass_threshold;
    match book.register_input(&name, &grade_input) {
        Ok(record) => {
            let message = format!(
                "Course '{}' registered. Grade: {}",
                record.name,
                format_colored_grade(record.grade, threshold, color)
            );
            writeln!(io.out(), "{}", message)?;
        }
        Err(e) => report_error(io, &e)?,
    }
    Ok(())
}

pub fn list<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "REGISTERED COURSES")?;
    if roster_is_empty(book, io)? {
        return Ok(());
    }

    let config = book.config();
    let listing = format_course_list(book.store().records(), config.pass_threshold, config.color);
    write!(io.out(), "{}", listing)?;
    Ok(())
}

pub fn update<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "UPDATE COURSE GRADE")?;
    if roster_is_empty(book, io)? {
        return Ok(());
    }

    let Some(name) = io.ask("Course name: ")? else {
        return Ok(());
    };
    if book.find_exact(&name).is_none() {
        return report_error(io, &Error::NotFound(name));
    }

    let Some(grade_input) = io.ask("New grade: ")? else {
        return Ok(());
    };
    match book.update_grade(&name, &grade_input) {
        Ok(update) => writeln!(
            io.out(),
            "Grade for '{}' updated: {} -> {}",
            update.name,
            display_grade(update.previous),
            display_grade(update.current)
        )?,
        Err(e) => report_error(io, &e)?,
    }
    Ok(())
}

pub fn delete<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "DELETE COURSE")?;
    if roster_is_empty(book, io)? {
        return Ok(());
    }

    let Some(name) = io.ask("Course to delete: ")? else {
        return Ok(());
    };
    if book.find_exact(&name).is_none() {
        return report_error(io, &Error::NotFound(name));
    }

    let Some(confirmed) = io.confirm("Are you sure you want to delete it? (y/n): ")? else {
        return Ok(());
    };
    match book.delete(&name, confirmed) {
        Ok(Deletion::Removed(record)) => {
            writeln!(io.out(), "Course '{}' deleted", record.name)?
        }
        Ok(Deletion::Cancelled) => writeln!(io.out(), "Operation cancelled")?,
        Err(e) => report_error(io, &e)?,
    }
    Ok(())
}
