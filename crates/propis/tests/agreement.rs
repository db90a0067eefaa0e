//! Tests for plural form selection and the word-form triple.

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use propis::words::SCALES;
use propis::{Currency, PluralForm, WordForms};

const RUBLE: WordForms = WordForms::new("рубль", "рубля", "рублей");

#[test]
fn one_selects_singular() {
    assert_eq!(PluralForm::for_count(1), PluralForm::One);
    assert_eq!(RUBLE.select(1), "рубль");
    assert_eq!(RUBLE.select(21), "рубль");
    assert_eq!(RUBLE.select(101), "рубль");
}

#[test]
fn two_to_four_select_few() {
    for n in [2, 3, 4, 22, 33, 44, 102] {
        assert_eq!(PluralForm::for_count(n), PluralForm::Few, "n = {n}");
    }
    assert_eq!(RUBLE.select(3), "рубля");
}

#[test]
fn five_to_twenty_select_many() {
    for n in 5..=20 {
        assert_eq!(PluralForm::for_count(n), PluralForm::Many, "n = {n}");
    }
    assert_eq!(RUBLE.select(0), "рублей");
    assert_eq!(RUBLE.select(100), "рублей");
}

#[test]
fn teens_override_trailing_digit() {
    assert_eq!(RUBLE.select(11), "рублей");
    assert_eq!(RUBLE.select(12), "рублей");
    assert_eq!(RUBLE.select(13), "рублей");
    assert_eq!(RUBLE.select(111), "рублей");
    assert_eq!(RUBLE.select(1014), "рублей");
}

#[test]
fn matches_cldr_russian_cardinals() {
    let rules = PluralRules::try_new(locale!("ru").into(), PluralRuleType::Cardinal.into())
        .expect("russian plural rules");
    for n in 0..10_000_i64 {
        let expected = match rules.category_for(n) {
            PluralCategory::One => PluralForm::One,
            PluralCategory::Few => PluralForm::Few,
            PluralCategory::Many => PluralForm::Many,
            other => panic!("unexpected category {other:?} for {n}"),
        };
        assert_eq!(PluralForm::for_count(n as u64), expected, "n = {n}");
    }
}

#[test]
fn form_names_follow_cldr() {
    assert_eq!(PluralForm::One.to_string(), "one");
    assert_eq!(PluralForm::Few.to_string(), "few");
    assert_eq!(PluralForm::Many.to_string(), "many");
}

#[test]
fn scale_table_is_ordered_largest_first() {
    let divisors: Vec<u64> = SCALES.iter().map(|s| s.divisor).collect();
    assert_eq!(
        divisors,
        [1_000_000_000_000_u64, 1_000_000_000, 1_000_000, 1_000]
    );
    assert_eq!(SCALES[3].name.select(2), "тысячи");
    assert_eq!(SCALES[2].name.select(5), "миллионов");
}

#[test]
fn tenge_is_indeclinable() {
    let unit = Currency::Kzt.unit();
    assert_eq!(unit.select(1), "тенге");
    assert_eq!(unit.select(2), "тенге");
    assert_eq!(unit.select(5), "тенге");
}
