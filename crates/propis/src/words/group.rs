use crate::types::Gender;
use crate::words::tables::{HUNDREDS, TEENS, TENS, UNITS, UNITS_FEMININE};

/// Converts a three-digit group (0–999) into its words.
///
/// Returns an empty list for 0. `gender` only affects a trailing 1 or 2,
/// which become "одна"/"две" for feminine nouns.
///
/// # Example
///
/// ```
/// use propis::Gender;
/// use propis::words::group_to_words;
///
/// assert_eq!(group_to_words(512, Gender::Masculine), ["пятьсот", "двенадцать"]);
/// assert_eq!(group_to_words(22, Gender::Feminine), ["двадцать", "две"]);
/// assert!(group_to_words(0, Gender::Masculine).is_empty());
/// ```
pub fn group_to_words(n: u64, gender: Gender) -> Vec<&'static str> {
    debug_assert!(n < 1000, "group value {n} out of range");
    let n = n % 1000;
    let mut words = Vec::with_capacity(3);

    let hundreds = digit(n.div_euclid(100));
    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }

    let rest = n % 100;
    let tens = digit(rest.div_euclid(10));
    let units = digit(rest % 10);

    if tens == 1 {
        words.push(TEENS[units]);
        return words;
    }
    if tens > 1 {
        words.push(TENS[tens]);
    }
    if units > 0 {
        words.push(unit_word(units, gender));
    }
    words
}

fn unit_word(units: usize, gender: Gender) -> &'static str {
    match (gender, units) {
        (Gender::Feminine, 1 | 2) => UNITS_FEMININE[units],
        _ => UNITS[units],
    }
}

/// Narrows a single decimal digit to a table index.
fn digit(d: u64) -> usize {
    // Always below 10, so the cast is lossless.
    (d % 10) as usize
}
