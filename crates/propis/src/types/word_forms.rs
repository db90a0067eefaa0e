use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// The grammatical form a counted noun takes after a cardinal numeral.
///
/// Names follow the CLDR plural categories used for Russian integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralForm {
    /// Nominative singular, after numbers ending in 1 (except 11).
    One,
    /// Genitive singular, after numbers ending in 2, 3, 4 (except 12–14).
    Few,
    /// Genitive plural, after 0, 5–9, and all of 11–19.
    Many,
}

impl PluralForm {
    /// Selects the form governed by `count`.
    ///
    /// The teens check runs before the last-digit check: 11–19 always take
    /// [`PluralForm::Many`] whatever their trailing digit.
    ///
    /// ```
    /// use propis::PluralForm;
    ///
    /// assert_eq!(PluralForm::for_count(1), PluralForm::One);
    /// assert_eq!(PluralForm::for_count(3), PluralForm::Few);
    /// assert_eq!(PluralForm::for_count(12), PluralForm::Many);
    /// assert_eq!(PluralForm::for_count(22), PluralForm::Few);
    /// ```
    pub const fn for_count(count: u64) -> PluralForm {
        let tail = count % 100;
        if tail > 4 && tail < 20 {
            return PluralForm::Many;
        }
        match count % 10 {
            1 => PluralForm::One,
            2..=4 => PluralForm::Few,
            _ => PluralForm::Many,
        }
    }

    /// CLDR category name for this form.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralForm::One => "one",
            PluralForm::Few => "few",
            PluralForm::Many => "many",
        }
    }
}

impl Display for PluralForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// The three agreement forms of a countable noun.
///
/// Every scale name and currency unit supplies exactly these three forms.
/// Values are built as constants and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WordForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl WordForms {
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    /// Returns the word for a given form.
    pub const fn get(&self, form: PluralForm) -> &'static str {
        match form {
            PluralForm::One => self.one,
            PluralForm::Few => self.few,
            PluralForm::Many => self.many,
        }
    }

    /// Returns the word that agrees with `count`.
    ///
    /// ```
    /// use propis::WordForms;
    ///
    /// let million = WordForms::new("миллион", "миллиона", "миллионов");
    /// assert_eq!(million.select(1), "миллион");
    /// assert_eq!(million.select(4), "миллиона");
    /// assert_eq!(million.select(11), "миллионов");
    /// ```
    pub const fn select(&self, count: u64) -> &'static str {
        self.get(PluralForm::for_count(count))
    }
}
