//! Interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::Gradebook;
use strum::EnumCount;
use tracing::debug;

use crate::commands;
use crate::menu::{self, MenuChoice};
use crate::prompter::Prompter;

/// Show the menu and run commands until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(book: &mut Gradebook, io: &mut Prompter<R, W>) -> Result<()> {
    writeln!(io.out(), "Welcome to the Gradebook")?;

    loop {
        write!(io.out(), "{}", menu::render())?;
        let Some(input) = io.ask("Select an option: ")? else {
            debug!("End of input at menu prompt");
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Exit) => {
                writeln!(io.out(), "\nThank you for using the Gradebook. Goodbye!")?;
                break;
            }
            Some(choice) => {
                debug!("Menu choice: {:?}", choice);
                commands::dispatch(choice, book, io)?;
            }
            None => writeln!(
                io.out(),
                "Invalid option. Please choose an option from 1 to {}.",
                MenuChoice::COUNT
            )?,
        }

        if io.ask("\nPress Enter to continue...")?.is_none() {
            break;
        }
    }
    Ok(())
}
