//! Output formatting for the shell.
//!
//! - `console` - colored, human-readable roster and statistics lines
//! - `json` - roster and summary as JSON

pub mod console;
pub mod json;

pub use console::*;
pub use json::*;
