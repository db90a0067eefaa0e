use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Options controlling how an amount is spelled.
///
/// # Example
///
/// ```
/// use propis::{Currency, SpellOptions, spell};
///
/// let options = SpellOptions::builder().currency(Currency::Kzt).capitalize(true).build();
/// assert_eq!(spell(1000.0, &options).unwrap(), "Одна тысяча тенге");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct SpellOptions {
    /// Currency whose unit word ends the phrase.
    #[builder(default)]
    #[serde(default)]
    pub currency: Currency,

    /// Uppercase the first letter, as amount lines in documents are written.
    #[builder(default)]
    #[serde(default)]
    pub capitalize: bool,
}
