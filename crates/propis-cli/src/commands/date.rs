//! Implementation of the `propis date` command.

use miette::Result;
use owo_colors::{OwoColorize, Stream};
use propis::format_date_ru;

/// Arguments for the date command.
#[derive(Debug, clap::Args)]
pub struct DateArgs {
    /// Date in YYYY-MM-DD format
    pub date: String,
}

/// Run the date command.
pub fn run_date(args: DateArgs) -> Result<i32> {
    let rendered = format_date_ru(&args.date);
    println!("{}", rendered);

    // The formatter echoes unparseable input back.
    if !args.date.is_empty() && rendered == args.date {
        eprintln!(
            "{}",
            "date was not in YYYY-MM-DD format".if_supports_color(Stream::Stderr, |t| t.yellow())
        );
        return Ok(exitcode::DATAERR);
    }
    Ok(exitcode::OK)
}
