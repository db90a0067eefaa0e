//! Tests for input sanitizing, digit grouping, and document dates.

use std::io::{Result as IoResult, Write};
use std::sync::{Arc, Mutex};

use propis::format::MONTHS_GENITIVE;
use propis::{format_date_ru, format_number_with_spaces, sanitize_number_input};
use tracing::Level;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

/// Runs `f` under a subscriber that records warnings and returns the output.
fn capture_warnings(f: impl FnOnce()) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();
    with_default(subscriber, f);
    log.contents()
}

// === sanitize_number_input ===

#[test]
fn sanitize_normalizes_comma() {
    assert_eq!(sanitize_number_input("12,5"), "12.5");
}

#[test]
fn sanitize_collapses_extra_dots() {
    assert_eq!(sanitize_number_input("1.2.3"), "1.23");
    assert_eq!(sanitize_number_input("1,2.3,4"), "1.234");
}

#[test]
fn sanitize_is_idempotent() {
    let inputs = [
        "",
        "abc",
        "1 000 000",
        "12,50 тг",
        "1.2.3",
        "..5..",
        ",,,",
        "-7,0.1",
        "₸ 9 999,99",
    ];
    for input in inputs {
        let once = sanitize_number_input(input);
        assert_eq!(sanitize_number_input(&once), once, "input = {input:?}");
    }
}

// === format_number_with_spaces ===

#[test]
fn spaces_every_three_digits() {
    assert_eq!(format_number_with_spaces("1000000"), "1 000 000");
    assert_eq!(format_number_with_spaces("123456789"), "123 456 789");
    assert_eq!(format_number_with_spaces("12"), "12");
}

#[test]
fn spaces_empty_input() {
    assert_eq!(format_number_with_spaces(""), "");
}

#[test]
fn spaces_after_sanitize() {
    let clean = sanitize_number_input("2500000,5");
    assert_eq!(format_number_with_spaces(&clean), "2 500 000.5");
}

// === format_date_ru ===

#[test]
fn date_in_document_style() {
    assert_eq!(format_date_ru("2024-01-05"), "«05» января 2024 г.");
    assert_eq!(format_date_ru("1999-12-31"), "«31» декабря 1999 г.");
}

#[test]
fn date_every_month() {
    for (i, month) in MONTHS_GENITIVE.iter().enumerate() {
        let iso = format!("2023-{:02}-15", i + 1);
        assert_eq!(format_date_ru(&iso), format!("«15» {month} 2023 г."));
    }
}

#[test]
fn date_empty_input() {
    assert_eq!(format_date_ru(""), "");
}

#[test]
fn date_malformed_input_returned_unchanged() {
    let inputs = [
        "not a date",
        "2024-13-01",
        "2023-02-29",
        "05.01.2024",
        "2024-01",
        "2024-1-5",
        " 2024-01-05",
        "+2024-01-05",
        "2024-01-05 ",
    ];
    for input in inputs {
        assert_eq!(format_date_ru(input), input);
    }
}

#[test]
fn date_year_is_padded_to_four_digits() {
    assert_eq!(format_date_ru("0005-01-01"), "«01» января 0005 г.");
}

#[test]
fn date_malformed_input_is_logged() {
    for input in ["2024-1-5", "2024-02-30"] {
        let log = capture_warnings(|| {
            assert_eq!(format_date_ru(input), input);
        });
        assert!(log.contains("WARN"), "no warning for {input:?}: {log}");
        assert!(log.contains(input), "warning does not name {input:?}: {log}");
    }
}

#[test]
fn date_valid_and_empty_input_not_logged() {
    let log = capture_warnings(|| {
        assert_eq!(format_date_ru("2024-01-05"), "«05» января 2024 г.");
        assert_eq!(format_date_ru(""), "");
    });
    assert!(log.is_empty(), "unexpected log output: {log}");
}
