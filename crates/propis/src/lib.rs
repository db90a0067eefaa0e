//! Spelling out currency amounts in Russian.
//!
//! The core is [`try_number_to_words`]: it splits an integer into groups of
//! three digits, gives each group the gender of its scale name, inflects the
//! scale names, and closes the phrase with a currency unit that agrees with
//! the last group. [`format`] holds the small input and date helpers that go
//! with it on a payment form.
//!
//! ```
//! use propis::{Currency, number_to_words_ru};
//!
//! assert_eq!(
//!     number_to_words_ru(1_234_567.0, Currency::Kzt),
//!     "один миллион двести тридцать четыре тысячи пятьсот шестьдесят семь тенге"
//! );
//! ```

pub mod format;
pub mod types;
pub mod words;

pub use format::{format_date_ru, format_number_with_spaces, sanitize_number_input};
pub use types::{Currency, Gender, ParseCurrencyError, PluralForm, WordForms};
pub use words::{
    ConvertError, SpellOptions, integer_to_words, number_to_words_ru, spell, try_number_to_words,
};
