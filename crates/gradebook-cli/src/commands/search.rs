//! Linear and binary course search.

use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::export::format_course;
use gradebook_core::{Error, Gradebook};
use tracing::debug;

use super::{header, report_error, roster_is_empty};
use crate::prompter::Prompter;

pub fn linear<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "SEARCH COURSE (LINEAR SEARCH)")?;
    if roster_is_empty(book, io)? {
        return Ok(());
    }

    let Some(query) = io.ask("Course name to search: ")? else {
        return Ok(());
    };
    let config = book.config();
    let found = book.linear_search(&query);
    debug!("Linear search for {:?} matched {} course(s)", query, found.len());

    if found.is_empty() {
        writeln!(io.out(), "No courses found with that name")?;
        return Ok(());
    }
    writeln!(io.out(), "Courses found:")?;
    for record in found {
        let line = format_course(record, config.pass_threshold, config.color);
        writeln!(io.out(), "- {}", line)?;
    }
    Ok(())
}

pub fn binary<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "SEARCH COURSE (BINARY SEARCH)")?;
    if roster_is_empty(book, io)? {
        return Ok(());
    }

    // Check the ordering before asking for a query, so an unsorted roster
    // is reported straight away.
    if !gradebook_core::is_sorted_by_name(book.store()) {
        report_error(io, &Error::PreconditionNotSorted)?;
        writeln!(
            io.out(),
            "Binary search needs the courses registered in name order; option 9 only shows a sorted view."
        )?;
        return Ok(());
    }

    let Some(query) = io.ask("Course name to search: ")? else {
        return Ok(());
    };
    let config = book.config();
    match book.binary_search_by_name(&query) {
        Ok(record) => {
            let line = format_course(record, config.pass_threshold, config.color);
            writeln!(io.out(), "Course found: {}", line)?;
        }
        Err(e) => report_error(io, &e)?,
    }
    Ok(())
}
