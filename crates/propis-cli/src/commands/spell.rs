//! Implementation of the `propis spell` command.

use miette::{IntoDiagnostic, Report, Result};
use propis::{format_number_with_spaces, sanitize_number_input, spell, Currency, SpellOptions};
use serde::Serialize;

use crate::output::table::{format_spelling_table, SpelledAmount};
use crate::output::AmountDiagnostic;

/// Arguments for the spell command.
#[derive(Debug, clap::Args)]
pub struct SpellArgs {
    /// Amounts to spell out (e.g. 1500, "1 500,75", -20)
    #[arg(required = true, allow_negative_numbers = true)]
    pub amounts: Vec<String>,

    /// Currency of the amounts
    #[arg(long, env = "PROPIS_CURRENCY", default_value_t = Currency::Kzt)]
    pub currency: Currency,

    /// Capitalize the first word
    #[arg(long)]
    pub cap: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one spelled amount.
#[derive(Debug, Serialize)]
struct SpellJson {
    input: String,
    amount: f64,
    words: String,
}

/// Parse user input into an amount, keeping a leading minus sign that the
/// sanitizer would drop.
fn parse_amount(input: &str) -> Result<(String, f64), AmountDiagnostic> {
    let trimmed = input.trim();
    let negative = trimmed.starts_with('-');
    let clean = sanitize_number_input(trimmed);
    let value: f64 = clean
        .parse()
        .map_err(|_| AmountDiagnostic::new(input, "not a number", None))?;
    let display = format_number_with_spaces(&clean);
    if negative {
        Ok((format!("-{display}"), -value))
    } else {
        Ok((display, value))
    }
}

/// Spell a single input, producing a diagnostic on failure.
fn spell_input(input: &str, options: &SpellOptions) -> Result<SpelledAmount, AmountDiagnostic> {
    let (display, amount) = parse_amount(input)?;
    let words = spell(amount, options).map_err(|e| {
        AmountDiagnostic::new(
            input,
            &e.to_string(),
            Some("amounts must be below 1 000 000 000 000 000".to_string()),
        )
    })?;
    Ok(SpelledAmount {
        input: input.to_string(),
        display,
        amount,
        words,
    })
}

/// Run the spell command.
pub fn run_spell(args: SpellArgs) -> Result<i32> {
    let options = SpellOptions::builder()
        .currency(args.currency)
        .capitalize(args.cap)
        .build();

    let mut spelled = Vec::new();
    let mut failed = false;
    for input in &args.amounts {
        match spell_input(input, &options) {
            Ok(amount) => spelled.push(amount),
            Err(diagnostic) => {
                failed = true;
                eprintln!("{:?}", Report::new(diagnostic));
            }
        }
    }

    if args.json {
        let json: Vec<SpellJson> = spelled
            .iter()
            .map(|s| SpellJson {
                input: s.input.clone(),
                amount: s.amount,
                words: s.words.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else if spelled.len() == 1 && args.amounts.len() == 1 {
        println!("{}", spelled[0].words);
    } else if !spelled.is_empty() {
        println!("{}", format_spelling_table(&spelled));
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
