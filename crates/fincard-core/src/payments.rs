use crate::coerce::parse_plain_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Artifact the dividend tables print for a date they don't know.
const UNKNOWN_DATE: &str = "N/AN/A";

/// Date formats used by the dividend history tables ("Feb. 14, 2024", "May 14, 2024").
const DATE_FORMATS: [&str; 2] = ["%b. %d, %Y", "%b %d, %Y"];

// input
// -------------------------------------------------------------------------------------------------

/// One row of a scraped dividend history table, as text.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RawPayment {
    #[serde(default = "default_kind")]
    pub kind: String,
    pub ex_date: String,
    pub pay_date: String,
    pub value: String,
}

fn default_kind() -> String {
    "DIVIDENDO".to_string()
}

// output
// -------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Payment {
    pub asset: String,
    pub ex_date: Option<NaiveDate>,
    pub pay_date: Option<NaiveDate>,
    pub value: f64,
    pub kind: String,
}

/// Normalize a dividend history:
///
/// - rows without an ex-date are dropped;
/// - dates are parsed, an unknown format becomes `None`;
/// - rows without a positive value are dropped;
/// - rows are sorted by asset, then most recent payment first.
pub fn normalize_payments(asset: &str, raw: Vec<RawPayment>) -> Vec<Payment> {
    let asset = asset.trim().to_uppercase();
    let scraped = raw.len();

    let mut payments: Vec<Payment> = raw
        .into_iter()
        .filter_map(|row| {
            let ex_date = row.ex_date.replace(UNKNOWN_DATE, "");
            let ex_date = ex_date.trim();
            if ex_date.is_empty() {
                trace!("[{asset}] payment without ex-date skipped");
                return None;
            }

            let value = parse_plain_number(&row.value).filter(|value| *value > 0.0)?;
            Some(Payment {
                asset: asset.clone(),
                ex_date: parse_date(ex_date),
                pay_date: parse_date(&row.pay_date.replace(UNKNOWN_DATE, "")),
                value,
                kind: row.kind.trim().to_uppercase(),
            })
        })
        .collect();

    payments.sort_by(|a, b| {
        a.asset
            .cmp(&b.asset)
            .then_with(|| latest_first(&a.pay_date, &b.pay_date))
    });

    debug!("[{asset}] {} of {scraped} payments kept", payments.len());
    payments
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

// descending, unknown dates last
fn latest_first(a: &Option<NaiveDate>, b: &Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[cfg(test)]
fn raw(ex_date: &str, pay_date: &str, value: &str) -> RawPayment {
    RawPayment {
        kind: default_kind(),
        ex_date: ex_date.to_string(),
        pay_date: pay_date.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn history_is_cleaned_and_sorted() {
    let payments = normalize_payments(
        "msft",
        vec![
            raw("Feb. 14, 2024", "Mar. 14, 2024", "0.75"),
            raw("N/AN/A", "N/AN/A", "0.50"),
            raw("May 15, 2024", "Jun. 13, 2024", "0.75"),
            raw("Nov. 15, 2023", "Dec. 14, 2023", "0"),
            raw("Aug. 15, 2023", "sometime", "0.68"),
            raw("Aug. 16, 2023", "Sep. 14, 2023", "n/a"),
        ],
    );

    assert_eq!(payments.len(), 3);
    assert!(payments.iter().all(|payment| payment.asset == "MSFT"));
    assert_eq!(payments[0].pay_date, date(2024, 6, 13));
    assert_eq!(payments[1].pay_date, date(2024, 3, 14));
    assert_eq!(payments[1].ex_date, date(2024, 2, 14));
    // unparsable payment date sorts last
    assert_eq!(payments[2].pay_date, None);
    assert_eq!(payments[2].value, 0.68);
}
