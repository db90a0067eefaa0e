//! Full amount conversion: sign, magnitude groups, scale names, currency.

use tracing::{debug, warn};

use crate::types::{Currency, Gender};
use crate::words::error::ConvertError;
use crate::words::group::group_to_words;
use crate::words::options::SpellOptions;
use crate::words::tables::{MAX_AMOUNT, MINUS, SCALES, ZERO};

/// Spells out an amount in Russian words followed by the currency unit.
///
/// The fractional part is discarded and the sign is kept. The currency word
/// agrees with the last three-digit group only, so exactly one thousand is
/// "одна тысяча тенге" with the unit in the form governed by zero.
///
/// # Errors
///
/// Returns [`ConvertError::NotANumber`] for NaN and
/// [`ConvertError::OutOfRange`] for infinities and magnitudes of 10^15 or
/// more.
///
/// # Example
///
/// ```
/// use propis::{Currency, try_number_to_words};
///
/// assert_eq!(try_number_to_words(21.0, Currency::Kzt).unwrap(), "двадцать один тенге");
/// assert_eq!(
///     try_number_to_words(-2_001_000.99, Currency::Kzt).unwrap(),
///     "минус два миллиона одна тысяча тенге"
/// );
/// ```
pub fn try_number_to_words(amount: f64, currency: Currency) -> Result<String, ConvertError> {
    let magnitude = magnitude(amount)?;
    let mut words = Vec::new();

    if magnitude == 0 {
        words.push(ZERO);
    } else {
        if amount.is_sign_negative() {
            words.push(MINUS);
        }
        push_cardinal(&mut words, magnitude, Gender::Masculine);
    }
    words.push(currency.unit().select(magnitude % 1000));

    Ok(words.join(" "))
}

/// Spells out an amount, returning an empty string when it cannot be
/// converted.
///
/// An empty result means "no output". Out-of-range amounts are also logged
/// as a warning; NaN is not, since callers pass it for blank input.
///
/// ```
/// use propis::{Currency, number_to_words_ru};
///
/// assert_eq!(number_to_words_ru(0.0, Currency::Kzt), "ноль тенге");
/// assert_eq!(number_to_words_ru(f64::NAN, Currency::Kzt), "");
/// ```
pub fn number_to_words_ru(amount: f64, currency: Currency) -> String {
    match try_number_to_words(amount, currency) {
        Ok(words) => words,
        Err(ConvertError::NotANumber) => String::new(),
        Err(e @ ConvertError::OutOfRange { .. }) => {
            warn!(amount, error = %e, "amount cannot be spelled out");
            String::new()
        }
    }
}

/// Spells out an amount according to `options`.
///
/// # Errors
///
/// Same as [`try_number_to_words`].
pub fn spell(amount: f64, options: &SpellOptions) -> Result<String, ConvertError> {
    let words = try_number_to_words(amount, options.currency)?;
    debug!(amount, currency = %options.currency, %words, "spelled amount");
    if options.capitalize {
        Ok(capitalize_first(&words))
    } else {
        Ok(words)
    }
}

/// Spells out a non-negative integer without a currency unit.
///
/// `gender` applies to the final group, the one that agrees with the counted
/// noun; the thousands group is always feminine.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfRange`] for values of 10^15 or more.
///
/// ```
/// use propis::{Gender, integer_to_words};
///
/// assert_eq!(integer_to_words(0, Gender::Masculine).unwrap(), "ноль");
/// assert_eq!(integer_to_words(2002, Gender::Feminine).unwrap(), "две тысячи две");
/// ```
pub fn integer_to_words(n: u64, gender: Gender) -> Result<String, ConvertError> {
    if n >= MAX_AMOUNT {
        return Err(ConvertError::OutOfRange { amount: n as f64 });
    }
    if n == 0 {
        return Ok(ZERO.to_string());
    }
    let mut words = Vec::new();
    push_cardinal(&mut words, n, gender);
    Ok(words.join(" "))
}

/// Validates `amount` and returns its truncated absolute value.
fn magnitude(amount: f64) -> Result<u64, ConvertError> {
    if amount.is_nan() {
        return Err(ConvertError::NotANumber);
    }
    let magnitude = amount.abs().trunc();
    // Also rejects infinities. 10^15 is exact in f64.
    if magnitude >= MAX_AMOUNT as f64 {
        return Err(ConvertError::OutOfRange { amount });
    }
    // In range and integral, so the cast is exact.
    Ok(magnitude as u64)
}

/// Appends the words for `n` (nonzero, below [`MAX_AMOUNT`]) group by group,
/// largest magnitude first.
fn push_cardinal(words: &mut Vec<&'static str>, n: u64, gender: Gender) {
    let mut rest = n;
    for scale in &SCALES {
        let group = rest.div_euclid(scale.divisor);
        rest %= scale.divisor;
        if group == 0 {
            continue;
        }
        words.extend(group_to_words(group, scale.gender));
        words.push(scale.name.select(group));
    }
    words.extend(group_to_words(rest, gender));
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
