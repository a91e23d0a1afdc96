//! Conversion of single free-text financial values into normalized scalars.
//!
//! Two locale conventions are in play and they are kept apart on purpose:
//!
//! - the word-scaled parser reads `1,234.5 MILLION` (comma thousands, point decimal);
//! - the letter-scaled parser reads `1,5 M` (comma decimal).
//!
//! Every function here is fail-soft: missing, sentinel and unparsable input becomes `None`.

use chrono::NaiveDate;

/// Currency prefixes the sites print in front of amounts.
const CURRENCY_PREFIXES: [&str; 5] = ["R$ ", "R$\n", "US$", "US$\n", "$ "];

/// Text that means "no value" in a numeric column.
const NUMERIC_SENTINELS: [&str; 6] = ["0", "0.00", "-", "--", "", "NAN"];

/// How the pages print calendar dates.
const PAGE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Text that means "no value" in a string column.
const STRING_SENTINELS: [&str; 7] = ["-%", "-% A.A", "-", "--", "", "0.00%", "NAN"];

/// Scale words, English and the sites' Portuguese, singular and plural.
const SCALE_WORDS: [(&str, f64); 15] = [
    ("THOUSANDS", 1e3),
    ("THOUSAND", 1e3),
    ("MIL", 1e3),
    ("MILLIONS", 1e6),
    ("MILLION", 1e6),
    ("MILHÕES", 1e6),
    ("MILHÃO", 1e6),
    ("BILLIONS", 1e9),
    ("BILLION", 1e9),
    ("BILHÕES", 1e9),
    ("BILHÃO", 1e9),
    ("TRILLIONS", 1e12),
    ("TRILLION", 1e12),
    ("TRILHÕES", 1e12),
    ("TRILHÃO", 1e12),
];

const SCALE_LETTERS: [(char, f64); 4] = [('K', 1e3), ('M', 1e6), ('B', 1e9), ('T', 1e12)];

// scaled numbers
// -------------------------------------------------------------------------------------------------

/// Parse a number written with a trailing scale word, e.g. `1.5 MILLION` or `2 BILHÕES`.
///
/// Commas are thousands separators and the point is the decimal mark. The result is rounded to
/// two decimal places.
///
/// ```rust
/// use fincard_core::coerce::parse_word_scaled_number;
///
/// assert_eq!(parse_word_scaled_number(Some("1.5 MILLION")), Some(1_500_000.00));
/// assert_eq!(parse_word_scaled_number(Some("2 BILLION")), Some(2_000_000_000.00));
/// assert_eq!(parse_word_scaled_number(Some("1,234.5")), Some(1_234.50));
/// assert_eq!(parse_word_scaled_number(None), None);
/// ```
pub fn parse_word_scaled_number(text: Option<&str>) -> Option<f64> {
    let text = text?.trim().to_uppercase();

    let (numeral, scale) = SCALE_WORDS
        .iter()
        .find_map(|(word, scale)| {
            text.strip_suffix(word)
                .map(|numeral| (numeral.trim_end(), *scale))
        })
        .unwrap_or((text.as_str(), 1.0));

    let numeral = numeral.replace(',', "");
    scale_finite(&numeral, scale)
}

/// Parse a number written with a trailing scale letter, e.g. `1,5 M` or `3 K`.
///
/// Unlike [`parse_word_scaled_number`], the comma is the decimal mark here.
///
/// ```rust
/// use fincard_core::coerce::parse_letter_scaled_number;
///
/// assert_eq!(parse_letter_scaled_number(Some("1,5 M")), Some(1_500_000.00));
/// assert_eq!(parse_letter_scaled_number(Some("3 K")), Some(3_000.00));
/// ```
pub fn parse_letter_scaled_number(text: Option<&str>) -> Option<f64> {
    let text = text?.trim().to_uppercase();

    let (numeral, scale) = SCALE_LETTERS
        .iter()
        .find_map(|(letter, scale)| {
            text.strip_suffix(*letter)
                .map(|numeral| (numeral.trim_end(), *scale))
        })
        .unwrap_or((text.as_str(), 1.0));

    let numeral = numeral.replace(',', ".");
    scale_finite(&numeral, scale)
}

/// The clean-up the sites' scaled columns get before either scaled parser runs: currency prefixes
/// dropped, `.` thousands separators removed, decimal comma turned into a point.
pub fn prepare_scaled(text: Option<&str>) -> Option<String> {
    let mut text = text?.to_string();
    for prefix in CURRENCY_PREFIXES {
        text = text.replace(prefix, "");
    }
    let text = text.replace('.', "").replace(',', ".");
    Some(text.trim().to_string())
}

// columns
// -------------------------------------------------------------------------------------------------

/// Coerce one locale-formatted amount (`R$ 1.234,56`) into a float.
///
/// ```rust
/// use fincard_core::coerce::coerce_numeric;
///
/// assert_eq!(coerce_numeric(Some("R$ 1.234,56")), Some(1234.56));
/// assert_eq!(coerce_numeric(Some("-")), None);
/// assert_eq!(coerce_numeric(Some("0.00")), None);
/// assert_eq!(coerce_numeric(Some("N/A")), None);
/// ```
pub fn coerce_numeric(value: Option<&str>) -> Option<f64> {
    let raw = value?.trim();
    if is_numeric_sentinel(raw) {
        return None;
    }

    let mut text = raw.to_string();
    for prefix in CURRENCY_PREFIXES {
        text = text.replace(prefix, "");
    }
    let text = text.replace('.', "").replace(',', ".");
    let text = text.trim();

    if is_numeric_sentinel(text) {
        return None;
    }
    parse_finite(text)
}

/// [`coerce_numeric`] over a whole column.
pub fn coerce_numeric_column(values: &[Option<&str>]) -> Vec<Option<f64>> {
    values.iter().map(|value| coerce_numeric(*value)).collect()
}

/// Normalize one display string: percent and slash spacing, decimal point, upper case.
///
/// ```rust
/// use fincard_core::coerce::coerce_string;
///
/// assert_eq!(coerce_string(Some("12,5 %")), Some("12.5%".to_string()));
/// assert_eq!(coerce_string(Some("-% a.a")), None);
/// ```
pub fn coerce_string(value: Option<&str>) -> Option<String> {
    let text = value?
        .replace(" %", "%")
        .replace(',', ".")
        .replace(" / ", "/")
        .to_uppercase();
    let text = text.trim();

    if STRING_SENTINELS.contains(&text) {
        return None;
    }
    Some(text.to_string())
}

/// A percentage the page prints without its sign (`8,5` next to a "%" label): the sign is added
/// when missing, then the value is normalized like any [`coerce_string`] value.
///
/// ```rust
/// use fincard_core::coerce::coerce_percent;
///
/// assert_eq!(coerce_percent(Some("8,5")), Some("8.5%".to_string()));
/// assert_eq!(coerce_percent(Some("8,5 %")), Some("8.5%".to_string()));
/// assert_eq!(coerce_percent(Some("-")), None);
/// ```
pub fn coerce_percent(value: Option<&str>) -> Option<String> {
    let text = coerce_string(value)?;
    match text.ends_with('%') {
        true => Some(text),
        false => coerce_string(Some(&format!("{text}%"))),
    }
}

/// A `dd/mm/yyyy` page date as an ISO `yyyy-mm-dd` string; anything else is `None`.
pub fn coerce_date(value: Option<&str>) -> Option<String> {
    let text = value?.trim();
    NaiveDate::parse_from_str(text, PAGE_DATE_FORMAT)
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// [`coerce_string`] over a whole column.
pub fn coerce_string_column(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|value| coerce_string(*value)).collect()
}

// display & final parse
// -------------------------------------------------------------------------------------------------

/// Point-decimal parse of an already cleaned value; a trailing `%` is dropped first.
pub fn parse_plain_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix('%').unwrap_or(text).trim();
    parse_finite(text)
}

/// Render a magnitude as an `N.NN%` display string.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", round_cents(value))
}

/// Render a float in the sites' own convention (`1234,56`), which [`coerce_numeric`] reads back
/// to the same value.
pub fn format_decimal_comma(value: f64) -> String {
    value.to_string().replace('.', ",")
}

// helpers
// -------------------------------------------------------------------------------------------------

fn is_numeric_sentinel(text: &str) -> bool {
    NUMERIC_SENTINELS
        .iter()
        .any(|sentinel| sentinel.eq_ignore_ascii_case(text))
}

// `str::parse` accepts "inf" and "NaN"; neither is a usable amount
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}

// the product can overflow even when the numeral is finite
fn scale_finite(numeral: &str, scale: f64) -> Option<f64> {
    parse_finite(numeral)
        .map(|number| round_cents(number * scale))
        .filter(|number| number.is_finite())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[test]
fn word_scale_vocabulary() {
    assert_eq!(parse_word_scaled_number(Some("3 THOUSANDS")), Some(3_000.0));
    assert_eq!(parse_word_scaled_number(Some("1 MIL")), Some(1_000.0));
    assert_eq!(parse_word_scaled_number(Some("2.5 MILHÕES")), Some(2_500_000.0));
    assert_eq!(parse_word_scaled_number(Some("1 MILHÃO")), Some(1_000_000.0));
    assert_eq!(parse_word_scaled_number(Some("1.25 BILHÃO")), Some(1_250_000_000.0));
    assert_eq!(parse_word_scaled_number(Some("4 TRILLIONS")), Some(4e12));
    assert_eq!(parse_word_scaled_number(Some("7 trilhões")), Some(7e12));
    assert_eq!(parse_word_scaled_number(Some("12.3456")), Some(12.35));
}

#[test]
fn word_scale_rejects_garbage() {
    assert_eq!(parse_word_scaled_number(Some("MILLION")), None);
    assert_eq!(parse_word_scaled_number(Some("ABC MILLION")), None);
    assert_eq!(parse_word_scaled_number(Some("")), None);
    assert_eq!(parse_word_scaled_number(Some("inf")), None);
}

#[test]
fn letter_scale_uses_decimal_comma() {
    assert_eq!(parse_letter_scaled_number(Some("2,25 B")), Some(2_250_000_000.0));
    assert_eq!(parse_letter_scaled_number(Some("1T")), Some(1e12));
    assert_eq!(parse_letter_scaled_number(Some("10,5")), Some(10.5));
    assert_eq!(parse_letter_scaled_number(Some("X M")), None);
    assert_eq!(parse_letter_scaled_number(None), None);
}

#[test]
fn scaled_columns_are_prepared_like_the_page() {
    let prepared = prepare_scaled(Some("R$ 1,5 BILHÕES"));
    assert_eq!(prepared.as_deref(), Some("1.5 BILHÕES"));
    assert_eq!(
        parse_word_scaled_number(prepared.as_deref()),
        Some(1_500_000_000.0)
    );
    assert_eq!(
        parse_letter_scaled_number(prepare_scaled(Some("R$ 3,2 M")).as_deref()),
        Some(3_200_000.0)
    );
}

#[test]
fn numeric_column_sentinels() {
    let column = coerce_numeric_column(&[
        Some("-"),
        Some(""),
        Some("0.00"),
        Some("0"),
        Some("0,00"),
        Some("--"),
        Some("NaN"),
        None,
    ]);
    assert!(column.iter().all(Option::is_none));
}

#[test]
fn numeric_column_currencies() {
    let column = coerce_numeric_column(&[
        Some("R$ 1.234,56"),
        Some("US$12,5"),
        Some("$ 7"),
        Some("R$\n2.000"),
        Some("12,34"),
        Some("-3,5"),
        Some("abc"),
    ]);
    assert_eq!(
        column,
        vec![
            Some(1234.56),
            Some(12.5),
            Some(7.0),
            Some(2000.0),
            Some(12.34),
            Some(-3.5),
            None
        ]
    );
}

#[test]
fn numeric_reparse_is_idempotent() {
    for raw in ["R$ 1.234,56", "12,34", "US$ 99.999,9", "-0,75", "1.000.000"] {
        let first = coerce_numeric(Some(raw)).expect("parsable amount");
        let again = coerce_numeric(Some(&format_decimal_comma(first)));
        assert_eq!(again, Some(first), "re-parsing {raw}");
    }
}

#[test]
fn string_column_normalization() {
    let column = coerce_string_column(&[
        Some("12,5 %"),
        Some("energia / elétrica"),
        Some("-%"),
        Some("-% A.A"),
        Some("0,00%"),
        Some(""),
        None,
    ]);
    assert_eq!(
        column,
        vec![
            Some("12.5%".to_string()),
            Some("ENERGIA/ELÉTRICA".to_string()),
            None,
            None,
            None,
            None,
            None
        ]
    );
}

#[test]
fn plain_numbers_and_percent_display() {
    assert_eq!(parse_plain_number("12.5%"), Some(12.5));
    assert_eq!(parse_plain_number(" 7 "), Some(7.0));
    assert_eq!(parse_plain_number("ABC"), None);
    assert_eq!(format_percent(12.344), "12.34%");
    assert_eq!(format_percent(5.0), "5.00%");
}

#[test]
fn scaled_overflow_is_unparsable() {
    assert_eq!(parse_word_scaled_number(Some("1e300 TRILLION")), None);
    assert_eq!(parse_letter_scaled_number(Some("1e300 T")), None);
    assert_eq!(parse_word_scaled_number(Some("1.5 TRILLION")), Some(1.5e12));
}

#[test]
fn scaled_columns_drop_every_currency() {
    assert_eq!(prepare_scaled(Some("R$\n1,5 B")).as_deref(), Some("1.5 B"));
    assert_eq!(
        parse_letter_scaled_number(prepare_scaled(Some("US$\n820,4 M")).as_deref()),
        Some(820_400_000.0)
    );
}

#[test]
fn percent_sign_is_added_once() {
    assert_eq!(coerce_percent(Some("10,25")), Some("10.25%".to_string()));
    assert_eq!(coerce_percent(Some("10,25%")), Some("10.25%".to_string()));
    assert_eq!(coerce_percent(Some("0,00")), None);
    assert_eq!(coerce_percent(Some("")), None);
    assert_eq!(coerce_percent(None), None);
}

#[test]
fn page_dates_become_iso() {
    assert_eq!(coerce_date(Some("05/01/2010")), Some("2010-01-05".to_string()));
    assert_eq!(coerce_date(Some(" 31/12/1999 ")), Some("1999-12-31".to_string()));
    assert_eq!(coerce_date(Some("2010-01-05")), None);
    assert_eq!(coerce_date(Some("-")), None);
    assert_eq!(coerce_date(None), None);
}
