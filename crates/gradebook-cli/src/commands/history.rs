use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::Gradebook;
use gradebook_core::export::format_history;

use super::header;
use crate::prompter::Prompter;

pub fn run<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "RECENT CHANGES")?;
    let history = book.history();
    if history.is_empty() {
        writeln!(io.out(), "No recent changes")?;
        return Ok(());
    }
    let listing = format_history(history.view_most_recent_first(), book.config().color);
    write!(io.out(), "{}", listing)?;
    Ok(())
}
