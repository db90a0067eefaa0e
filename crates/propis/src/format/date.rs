use chrono::{Datelike, NaiveDate};
use tracing::warn;

/// Month names in the genitive case, as used after a day number.
pub const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Renders a `YYYY-MM-DD` date the way Russian documents write it.
///
/// The input is read as a plain calendar date, so no time zone can move it
/// to a neighbouring day. Unparseable input is returned unchanged and a
/// warning is logged; empty input is returned as is without a warning.
///
/// ```
/// use propis::format::format_date_ru;
///
/// assert_eq!(format_date_ru("2024-01-05"), "«05» января 2024 г.");
/// assert_eq!(format_date_ru("05.01.2024"), "05.01.2024");
/// ```
pub fn format_date_ru(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    if !is_iso_date_shape(iso) {
        warn!(input = iso, "date is not in YYYY-MM-DD format, leaving it as is");
        return iso.to_string();
    }
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => render(date),
        Err(e) => {
            warn!(input = iso, error = %e, "failed to parse date, leaving it as is");
            iso.to_string()
        }
    }
}

/// Checks the fixed `YYYY-MM-DD` layout. chrono alone also accepts
/// unpadded fields, signs, and leading whitespace.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn render(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE
        .get(date.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("«{:02}» {month} {:04} г.", date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_requires_padded_fields() {
        assert!(is_iso_date_shape("2024-01-05"));
        assert!(!is_iso_date_shape("2024-1-5"));
        assert!(!is_iso_date_shape("2024/01/05"));
        assert!(!is_iso_date_shape("20240-1-05"));
        assert!(!is_iso_date_shape("２024-01-05"));
    }
}
