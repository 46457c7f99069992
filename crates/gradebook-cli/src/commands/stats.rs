use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::Gradebook;
use gradebook_core::export::{format_average, format_pass_fail};

use super::{header, report_error};
use crate::prompter::Prompter;

pub fn average<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "OVERALL AVERAGE")?;
    match book.average() {
        Ok(average) => writeln!(io.out(), "{}", format_average(average))?,
        Err(e) => report_error(io, &e)?,
    }
    Ok(())
}

pub fn pass_fail<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "PASSED AND FAILED COURSES")?;
    match book.pass_fail_counts() {
        Ok(counts) => writeln!(io.out(), "{}", format_pass_fail(&counts, book.config().color))?,
        Err(e) => report_error(io, &e)?,
    }
    Ok(())
}
