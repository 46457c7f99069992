use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::Gradebook;
use gradebook_core::export::format_roster_json;

use super::{header, report_error};
use crate::prompter::Prompter;

pub fn run<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "EXPORT COURSES (JSON)")?;
    match format_roster_json(book) {
        Ok(json) => writeln!(io.out(), "{}", json)?,
        Err(e) => report_error(io, &e)?,
    }
    Ok(())
}
