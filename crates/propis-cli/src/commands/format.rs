//! Implementation of the `propis format` command.

use miette::Result;
use propis::{format_number_with_spaces, sanitize_number_input};

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Raw numeric input, e.g. "1500000,50"
    pub raw: String,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> Result<i32> {
    let clean = sanitize_number_input(&args.raw);
    println!("{}", format_number_with_spaces(&clean));
    Ok(exitcode::OK)
}
