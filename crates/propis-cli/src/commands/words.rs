//! Implementation of the `propis words` command.

use miette::{miette, Result};
use propis::{integer_to_words, Gender};

/// Arguments for the words command.
#[derive(Debug, clap::Args)]
pub struct WordsArgs {
    /// Non-negative integer to spell out
    pub number: u64,

    /// Use feminine forms for the last group (одна, две)
    #[arg(long)]
    pub feminine: bool,
}

/// Run the words command.
pub fn run_words(args: WordsArgs) -> Result<i32> {
    let gender = if args.feminine {
        Gender::Feminine
    } else {
        Gender::Masculine
    };
    let words = integer_to_words(args.number, gender).map_err(|e| miette!("{}", e))?;
    println!("{}", words);
    Ok(exitcode::OK)
}
