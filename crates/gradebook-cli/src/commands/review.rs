//! Review request queue simulation.

use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::{Gradebook, Intake};

use super::header;
use crate::prompter::Prompter;

pub fn run<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    header(io, "REVIEW REQUEST QUEUE")?;
    writeln!(io.out(), "Enter courses for review (type 'fin' or 'end' to finish):")?;

    let queue = book.review_queue();
    queue.begin_session();
    while let Some(line) = io.ask("> ")? {
        if queue.enqueue(&line) == Intake::Finished {
            break;
        }
    }

    writeln!(io.out(), "\nProcessing requests:")?;
    let requests = queue.drain_and_process();
    if requests.is_empty() {
        writeln!(io.out(), "No requests to process")?;
        return Ok(());
    }
    for request in requests {
        writeln!(io.out(), "Reviewing: {}", request)?;
    }
    Ok(())
}
