//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without starting the interactive session.

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "gradebook")]
struct Args {
    #[arg(long, default_value_t = 60.0)]
    pass_threshold: f64,

    #[arg(long)]
    no_color: bool,
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["gradebook"]).unwrap();
    assert_eq!(args.pass_threshold, 60.0);
    assert!(!args.no_color);
}

#[test]
fn test_parse_pass_threshold() {
    let args = Args::try_parse_from(["gradebook", "--pass-threshold", "70.5"]).unwrap();
    assert_eq!(args.pass_threshold, 70.5);
}

#[test]
fn test_parse_no_color() {
    let args = Args::try_parse_from(["gradebook", "--no-color"]).unwrap();
    assert!(args.no_color);
}

#[test]
fn test_parse_invalid_threshold() {
    let result = Args::try_parse_from(["gradebook", "--pass-threshold", "high"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_unknown_flag() {
    let result = Args::try_parse_from(["gradebook", "--persist"]);
    assert!(result.is_err());
}
