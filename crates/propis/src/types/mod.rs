mod currency;
mod gender;
mod word_forms;

pub use currency::{Currency, ParseCurrencyError};
pub use gender::Gender;
pub use word_forms::{PluralForm, WordForms};
