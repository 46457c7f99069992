//! One module per menu family. Each command prompts for what it needs,
//! calls into the gradebook once and prints the outcome.

pub mod export;
pub mod history;
pub mod records;
pub mod review;
pub mod search;
pub mod sort;
pub mod stats;

use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::{Error, Gradebook};

use crate::menu::MenuChoice;
use crate::prompter::Prompter;

/// Run the command behind a menu choice. `Exit` is handled by the shell.
pub fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    book: &mut Gradebook,
    io: &mut Prompter<R, W>,
) -> Result<()> {
    match choice {
        MenuChoice::Register => records::register(book, io),
        MenuChoice::List => records::list(book, io),
        MenuChoice::Average => stats::average(book, io),
        MenuChoice::PassFail => stats::pass_fail(book, io),
        MenuChoice::LinearSearch => search::linear(book, io),
        MenuChoice::Update => records::update(book, io),
        MenuChoice::Delete => records::delete(book, io),
        MenuChoice::SortByGrade => sort::by_grade(book, io),
        MenuChoice::SortByName => sort::by_name(book, io),
        MenuChoice::BinarySearch => search::binary(book, io),
        MenuChoice::ReviewQueue => review::run(book, io),
        MenuChoice::History => history::run(book, io),
        MenuChoice::ExportJson => export::run(book, io),
        MenuChoice::Exit => Ok(()),
    }
}

fn header<R: BufRead, W: Write>(io: &mut Prompter<R, W>, title: &str) -> Result<()> {
    writeln!(io.out(), "\n--- {} ---", title)?;
    Ok(())
}

fn report_error<R: BufRead, W: Write>(io: &mut Prompter<R, W>, error: &Error) -> Result<()> {
    writeln!(io.out(), "Error: {}", error)?;
    Ok(())
}

/// Print the empty-roster notice. Returns `true` when there is nothing to work on.
fn roster_is_empty<R: BufRead, W: Write>(book: &Gradebook, io: &mut Prompter<R, W>) -> Result<bool> {
    if book.store().is_empty() {
        writeln!(io.out(), "No courses registered")?;
        return Ok(true);
    }
    Ok(false)
}
