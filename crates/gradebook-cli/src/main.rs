mod cli;
mod commands;
mod menu;
mod prompter;
mod shell;

use std::io;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use gradebook_core::{Config, Gradebook};
use prompter::Prompter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gradebook=warn,gradebook_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::default()
        .with_pass_threshold(args.pass_threshold)?
        .with_color(!args.no_color);
    let mut book = Gradebook::new(config);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    shell::run(&mut book, &mut prompter)
}
