//! Russian cardinal numerals and amount spelling.
//!
//! This module turns integers into words three digits at a time, applies
//! gender to each group, and inflects scale names and the currency unit so
//! they agree with the numeral in front of them.

mod convert;
mod error;
mod group;
mod options;
mod tables;

pub use convert::{integer_to_words, number_to_words_ru, spell, try_number_to_words};
pub use error::ConvertError;
pub use group::group_to_words;
pub use options::SpellOptions;
pub use tables::{MAX_AMOUNT, SCALES, Scale};
