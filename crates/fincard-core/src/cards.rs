use crate::error::ConfigError;
use crate::record::{Record, Section};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

lazy_static! {
    /// Icon names that leak into values from the trend arrows next to a number.
    static ref TREND_ARROW: Regex =
        Regex::new(r"\s*ARROW_(?:UP|DOWN)WARD").expect("valid trend arrow pattern");

    /// The catch-all label rules, English vocabulary.
    static ref ENGLISH_RULES: LabelRules = LabelRules::compile(&[
        (r"^DIVIDEND YIELD.*$", "DIVIDEND YIELD"),
        (r"^DY CAGR\(3 YEARS\).*$", "CAGR DIVIDEND YIELD 3 YEARS"),
        (r"^TOTAL VALUE CAGR\(3 YEARS\).*$", "CAGR 3 YEARS"),
        (r"^TOTAL NUMBER OF SHARES.*$", "NUMBER OF SHARES"),
    ])
    .expect("valid english label rules");

    /// The same rules in the vocabulary of the Brazilian sites.
    static ref PORTUGUESE_RULES: LabelRules = LabelRules::compile(&[
        (r"^DIVIDEND YIELD.*$", "DIVIDEND YIELD"),
        (r"^DY CAGR\(3 ANOS\).*$", "CAGR DIVIDEND YIELD 3 ANOS"),
        (r"^VALOR CAGR\(3 ANOS\).*$", "CAGR 3 ANOS"),
        (r"^Nº TOTAL DE PAPÉIS.*$", "QUANTIDADE DE PAPÉIS"),
    ])
    .expect("valid portuguese label rules");

    static ref STATUS_INVEST_RULES: LabelRules = LabelRules::compile(&[
        (r"^DIVIDEND YIELD.*$", "DIVIDEND YIELD"),
        (r"^DY CAGR\(3 ANOS\).*$", "CAGR DIVIDENDOS 3 ANOS"),
        (r"^VALOR CAGR\(3 ANOS\).*$", "CAGR 3 ANOS"),
        (r"^Nº TOTAL DE PAPÉIS.*$", "QUANTIDADE DE PAPÉIS"),
    ])
    .expect("valid statusinvest label rules");
}

// rules
// -------------------------------------------------------------------------------------------------

/// Folds every label matching `pattern` into exactly `canonical`.
///
/// The sites render dynamic suffixes (dates, trailing percentages) inside the label text, so a
/// match replaces the whole label rather than only the matched span.
#[derive(Clone, Debug)]
pub struct LabelRule {
    pattern: Regex,
    canonical: String,
}

impl LabelRule {
    pub fn new(pattern: &str, canonical: &str) -> Result<Self, ConfigError> {
        let compiled = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            canonical: canonical.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn matches(&self, label: &str) -> bool {
        self.pattern.is_match(label)
    }
}

/// A rule as written in a site config file, before its pattern is compiled.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawLabelRule {
    pub pattern: String,
    pub canonical: String,
}

/// An ordered list of [`LabelRule`]s; the first matching rule wins.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "Vec<RawLabelRule>", into = "Vec<RawLabelRule>")]
pub struct LabelRules(Vec<LabelRule>);

impl LabelRules {
    pub fn compile(rules: &[(&str, &str)]) -> Result<Self, ConfigError> {
        rules
            .iter()
            .map(|(pattern, canonical)| LabelRule::new(pattern, canonical))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn english() -> Self {
        ENGLISH_RULES.clone()
    }

    pub fn portuguese() -> Self {
        PORTUGUESE_RULES.clone()
    }

    /// The Portuguese rules with StatusInvest's name for the dividend CAGR.
    pub fn status_invest() -> Self {
        STATUS_INVEST_RULES.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical name of the first matching rule, or `None` when the label is already fine.
    pub fn canonicalize(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|rule| rule.matches(label))
            .map(LabelRule::canonical)
    }
}

impl Default for LabelRules {
    fn default() -> Self {
        Self::english()
    }
}

impl TryFrom<Vec<RawLabelRule>> for LabelRules {
    type Error = ConfigError;

    fn try_from(raw: Vec<RawLabelRule>) -> Result<Self, Self::Error> {
        raw.iter()
            .map(|rule| LabelRule::new(&rule.pattern, &rule.canonical))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<LabelRules> for Vec<RawLabelRule> {
    fn from(rules: LabelRules) -> Self {
        rules
            .0
            .into_iter()
            .map(|rule| RawLabelRule {
                pattern: rule.pattern().to_string(),
                canonical: rule.canonical,
            })
            .collect()
    }
}

// cleaning
// -------------------------------------------------------------------------------------------------

/// Normalize one raw section before it is merged with the others:
///
/// 1. records without a label are dropped;
/// 2. ` / ` in labels collapses to `/`, then the label rules fold noisy labels;
/// 3. records whose value is the empty string are dropped (a missing value is kept);
/// 4. trend-arrow icon names are stripped from values.
///
/// The returned section is freshly ordered; nothing refers back to the input positions.
pub fn clean_cards(section: Section, rules: &LabelRules) -> Section {
    let before = section.len();

    let cleaned: Vec<Record> = section
        .0
        .into_iter()
        .filter_map(|record| {
            let label = record.label?.replace(" / ", "/");
            let label = match rules.canonicalize(&label) {
                Some(canonical) => canonical.to_string(),
                None => label,
            };
            Some(Record {
                label: Some(label),
                value: record.value,
            })
        })
        .filter(|record| record.value.as_deref() != Some(""))
        .map(|record| Record {
            value: record.value.map(|value| strip_trend_arrows(&value)),
            ..record
        })
        .collect();

    trace!("cleaned cards: {before} records in, {} out", cleaned.len());
    Section(cleaned)
}

fn strip_trend_arrows(value: &str) -> String {
    if !value.contains("ARROW_") {
        return value.to_string();
    }
    TREND_ARROW.replace_all(value, "").trim().to_string()
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[test]
fn null_labels_and_empty_values_are_dropped() {
    let section = Section(vec![
        Record {
            label: None,
            value: Some("lost".to_string()),
        },
        Record::new("SETOR", ""),
        Record {
            label: Some("SEGMENTO".to_string()),
            value: None,
        },
        Record::new("TICKET", "ABCD3"),
    ]);

    let cleaned = clean_cards(section, &LabelRules::english());
    assert_eq!(
        cleaned,
        Section(vec![
            Record {
                label: Some("SEGMENTO".to_string()),
                value: None,
            },
            Record::new("TICKET", "ABCD3"),
        ])
    );
}

#[test]
fn noisy_labels_fold_into_canonical_ones() {
    let section: Section = [
        ("DIVIDEND YIELD 5Y AVG", "4,5%"),
        ("DY CAGR(3 YEARS) 12,3%", "12,3%"),
        ("TOTAL VALUE CAGR(3 YEARS) 2021-2024", "8%"),
        ("TOTAL NUMBER OF SHARES ON 2024-01-01", "1.000"),
        ("P / VP", "1,02"),
    ]
    .into_iter()
    .collect();

    let labels: Vec<String> = clean_cards(section, &LabelRules::english())
        .0
        .into_iter()
        .filter_map(|record| record.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "DIVIDEND YIELD",
            "CAGR DIVIDEND YIELD 3 YEARS",
            "CAGR 3 YEARS",
            "NUMBER OF SHARES",
            "P/VP",
        ]
    );
}

#[test]
fn portuguese_rules() {
    let rules = LabelRules::portuguese();
    assert_eq!(
        rules.canonicalize("Nº TOTAL DE PAPÉIS EM 31/12"),
        Some("QUANTIDADE DE PAPÉIS")
    );
    assert_eq!(
        rules.canonicalize("VALOR CAGR(3 ANOS) 5,2%"),
        Some("CAGR 3 ANOS")
    );
    assert_eq!(rules.canonicalize("COTAÇÃO"), None);

    let status_invest = LabelRules::status_invest();
    assert_eq!(
        status_invest.canonicalize("DY CAGR(3 ANOS) 7,1%"),
        Some("CAGR DIVIDENDOS 3 ANOS")
    );
    assert_eq!(
        rules.canonicalize("DY CAGR(3 ANOS) 7,1%"),
        Some("CAGR DIVIDEND YIELD 3 ANOS")
    );
}

#[test]
fn trend_arrows_are_stripped() {
    let section: Section = [
        ("VARIAÇÃO (12M)", "1.23 ARROW_UPWARD%"),
        ("DY", "ARROW_DOWNWARD 4,1%"),
    ]
    .into_iter()
    .collect();

    let values: Vec<Option<String>> = clean_cards(section, &LabelRules::english())
        .0
        .into_iter()
        .map(|record| record.value)
        .collect();
    assert_eq!(
        values,
        vec![Some("1.23%".to_string()), Some("4,1%".to_string())]
    );
}

#[test]
fn rules_load_from_json_in_order() {
    let rules: LabelRules = serde_json::from_str(
        r#"[
            {"pattern": "^LIQUIDEZ.*$", "canonical": "LIQUIDEZ"},
            {"pattern": "^LIQ", "canonical": "NEVER"}
        ]"#,
    )
    .expect("valid rules");
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.canonicalize("LIQUIDEZ MÉDIA DIÁRIA"), Some("LIQUIDEZ"));

    let written = serde_json::to_value(&rules).expect("rules serialize");
    assert_eq!(written[0]["pattern"], "^LIQUIDEZ.*$");
    assert_eq!(written[1]["canonical"], "NEVER");

    let invalid = serde_json::from_str::<LabelRules>(r#"[{"pattern": "(", "canonical": "X"}]"#);
    assert!(invalid.is_err());
}
