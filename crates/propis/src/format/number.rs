/// Reduces free-form numeric input to digits and a single decimal point.
///
/// Everything except ASCII digits, `,` and `.` is dropped, commas become
/// dots, and when several dots remain the first one is kept as the decimal
/// point while the fragments after it are joined. Applying it twice gives
/// the same result as applying it once.
///
/// ```
/// use propis::format::sanitize_number_input;
///
/// assert_eq!(sanitize_number_input("1 500,75 ₸"), "1500.75");
/// assert_eq!(sanitize_number_input("1.2.3"), "1.23");
/// ```
pub fn sanitize_number_input(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.split_once('.') {
        Some((integer, fraction)) => format!("{integer}.{}", fraction.replace('.', "")),
        None => cleaned,
    }
}

/// Inserts a space between every three digits of the integer part.
///
/// The part after the first `.` is left untouched, and a leading `-` stays
/// in front. Empty input stays empty.
///
/// ```
/// use propis::format::format_number_with_spaces;
///
/// assert_eq!(format_number_with_spaces("1000000"), "1 000 000");
/// assert_eq!(format_number_with_spaces("12345.6789"), "12 345.6789");
/// ```
pub fn format_number_with_spaces(numeric: &str) -> String {
    let (sign, body) = match numeric.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", numeric),
    };
    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (body, None),
    };

    let mut result = String::with_capacity(numeric.len() + integer.len().div_euclid(3));
    result.push_str(sign);
    push_grouped(&mut result, integer);
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.chars().count();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
}
