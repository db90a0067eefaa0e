//! Immutable word tables for cardinal numerals.

use crate::types::{Gender, WordForms};

/// Smallest magnitude that no longer fits the scale table (10^15).
pub const MAX_AMOUNT: u64 = 1_000_000_000_000_000;

/// Masculine digit words, indexed by digit. Index 0 is never emitted.
pub(crate) const UNITS: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

/// Feminine forms for the only gendered digits, 1 and 2.
pub(crate) const UNITS_FEMININE: [&str; 3] = ["", "одна", "две"];

/// Words for 10 through 19, indexed by the units digit.
pub(crate) const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

/// Words for 20 through 90, indexed by the tens digit.
pub(crate) const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

/// Words for 100 through 900, indexed by the hundreds digit.
pub(crate) const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

pub(crate) const ZERO: &str = "ноль";
pub(crate) const MINUS: &str = "минус";

/// A power-of-1000 magnitude with its grammatical gender and name forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub divisor: u64,
    pub gender: Gender,
    pub name: WordForms,
}

/// Named magnitudes, largest first. The trailing units group has no entry
/// and is always masculine.
pub const SCALES: [Scale; 4] = [
    Scale {
        divisor: 1_000_000_000_000,
        gender: Gender::Masculine,
        name: WordForms::new("триллион", "триллиона", "триллионов"),
    },
    Scale {
        divisor: 1_000_000_000,
        gender: Gender::Masculine,
        name: WordForms::new("миллиард", "миллиарда", "миллиардов"),
    },
    Scale {
        divisor: 1_000_000,
        gender: Gender::Masculine,
        name: WordForms::new("миллион", "миллиона", "миллионов"),
    },
    Scale {
        divisor: 1_000,
        gender: Gender::Feminine,
        name: WordForms::new("тысяча", "тысячи", "тысяч"),
    },
];
