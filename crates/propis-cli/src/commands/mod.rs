//! CLI command implementations.

mod date;
mod format;
mod spell;
mod words;

pub use date::{run_date, DateArgs};
pub use format::{run_format, FormatArgs};
pub use spell::{run_spell, SpellArgs};
pub use words::{run_words, WordsArgs};
