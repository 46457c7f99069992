//! Sorted views of the roster. The roster itself keeps its order.

use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::Gradebook;
use gradebook_core::export::format_course_list;

use super::{header, roster_is_empty};
use crate::prompter::Prompter;

pub fn by_grade<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "SORT COURSES BY GRADE (BUBBLE SORT)")?;
    if roster_is_empty(book, io)? {
        return Ok(());
    }

    let sorted = book.sort_by_grade_desc();
    let config = book.config();
    writeln!(io.out(), "Courses sorted by grade (descending):")?;
    write!(
        io.out(),
        "{}",
        format_course_list(&sorted, config.pass_threshold, config.color)
    )?;
    Ok(())
}

pub fn by_name<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "SORT COURSES BY NAME (INSERTION SORT)")?;
    if roster_is_empty(book, io)? {
        return Ok(());
    }

    let sorted = book.sort_by_name_asc();
    let config = book.config();
    writeln!(io.out(), "Courses sorted by name (alphabetically):")?;
    write!(
        io.out(),
        "{}",
        format_course_list(&sorted, config.pass_threshold, config.color)
    )?;
    Ok(())
}
