//! CLI argument definitions for gradebook.

use clap::Parser;
use gradebook_core::config::grade;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Interactive course grade manager", version)]
pub struct Args {
    /// Minimum grade counted as passed (0-100)
    #[arg(
        long,
        env = "GRADEBOOK_PASS_THRESHOLD",
        default_value_t = grade::PASS_THRESHOLD
    )]
    pub pass_threshold: f64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
