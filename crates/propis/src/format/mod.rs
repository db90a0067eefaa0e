//! Text helpers for amount input and document dates.
//!
//! These are small, total string transforms: none of them fails, and bad
//! input comes back as something the caller can still display.

mod date;
mod number;

pub use date::{MONTHS_GENITIVE, format_date_ru};
pub use number::{format_number_with_spaces, sanitize_number_input};
