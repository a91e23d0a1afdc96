use crate::coerce;
use crate::config::ColumnGroups;
use crate::record::{Row, Value};
use tracing::trace;

/// Applies each column group's coercion to a one-row wide table.
///
/// Columns requested but absent from the row are skipped; columns in no group pass through raw.
#[derive(Clone, Copy, Debug)]
pub struct ColumnClassifier<'a> {
    groups: &'a ColumnGroups,
}

impl<'a> ColumnClassifier<'a> {
    pub fn new(groups: &'a ColumnGroups) -> Self {
        Self { groups }
    }

    pub fn classify(&self, mut row: Row) -> Row {
        for column in &self.groups.numeric_columns {
            coerce_cell(&mut row, column, numeric);
        }
        for column in &self.groups.string_columns {
            coerce_cell(&mut row, column, string);
        }
        for column in &self.groups.percent_columns {
            coerce_cell(&mut row, column, |value| {
                Value::from(coerce::coerce_percent(text_of(value).as_deref()))
            });
        }
        for column in &self.groups.date_columns {
            coerce_cell(&mut row, column, |value| {
                Value::from(coerce::coerce_date(text_of(value).as_deref()))
            });
        }
        for column in &self.groups.word_scaled_columns {
            coerce_cell(&mut row, column, |value| {
                let prepared = coerce::prepare_scaled(text_of(value).as_deref());
                Value::from(coerce::parse_word_scaled_number(prepared.as_deref()))
            });
        }
        for column in &self.groups.letter_scaled_columns {
            coerce_cell(&mut row, column, |value| {
                let prepared = coerce::prepare_scaled(text_of(value).as_deref());
                Value::from(coerce::parse_letter_scaled_number(prepared.as_deref()))
            });
        }
        row
    }
}

fn coerce_cell<F>(row: &mut Row, column: &str, coerce: F)
where
    F: Fn(&Value) -> Value,
{
    match row.get_mut(column) {
        Some(cell) => {
            let coerced = coerce(cell);
            trace!("{column}: {cell:?} -> {coerced:?}");
            *cell = coerced;
        }
        None => trace!("{column} not present; skipped"),
    }
}

fn numeric(value: &Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(*number),
        Value::Text(text) => Value::from(coerce::coerce_numeric(Some(text))),
        Value::Null => Value::Null,
    }
}

fn string(value: &Value) -> Value {
    Value::from(coerce::coerce_string(text_of(value).as_deref()))
}

fn text_of(value: &Value) -> Option<String> {
    value
        .as_text()
        .map(str::to_string)
        .or_else(|| value.as_number().map(|number| number.to_string()))
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[cfg(test)]
use crate::config::ViewConfig;

#[cfg(test)]
fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(label, value)| (*label, Value::from(*value)))
        .collect()
}

#[test]
fn groups_get_their_coercion() {
    let view = ViewConfig::new("kpi", &[])
        .strings(&["DIVIDEND YIELD", "SETOR"])
        .numerics(&["COTAÇÃO", "P/VP"]);
    let classified = ColumnClassifier::new(&view.groups).classify(row(&[
        ("COTAÇÃO", "R$ 1.234,56"),
        ("P/VP", "-"),
        ("DIVIDEND YIELD", "12,5 %"),
        ("SETOR", "energia / elétrica"),
        ("EMPRESA", "Raw Co."),
    ]));

    assert_eq!(classified.get("COTAÇÃO"), Some(&Value::Number(1234.56)));
    assert_eq!(classified.get("P/VP"), Some(&Value::Null));
    assert_eq!(classified.get("DIVIDEND YIELD"), Some(&Value::from("12.5%")));
    assert_eq!(classified.get("SETOR"), Some(&Value::from("ENERGIA/ELÉTRICA")));
    // in no group: untouched
    assert_eq!(classified.get("EMPRESA"), Some(&Value::from("Raw Co.")));
}

#[test]
fn absent_columns_are_skipped() {
    let view = ViewConfig::new("price", &[]).numerics(&["COTAÇÃO", "NOT THERE"]);
    let classified =
        ColumnClassifier::new(&view.groups).classify(row(&[("COTAÇÃO", "12,34")]));

    assert_eq!(classified.len(), 1);
    assert!(!classified.contains("NOT THERE"));
}

#[test]
fn scaled_columns() {
    let view = ViewConfig::new("kpi", &[])
        .word_scaled(&["VALOR PATRIMONIAL"])
        .letter_scaled(&["LIQUIDEZ"]);
    let mut input = row(&[
        ("VALOR PATRIMONIAL", "R$ 1,5 BILHÕES"),
        ("LIQUIDEZ", "R$ 2,3 M"),
    ]);
    input.set("VACÂNCIA", Value::Null);

    let classified = ColumnClassifier::new(&view.groups).classify(input);
    assert_eq!(
        classified.get("VALOR PATRIMONIAL"),
        Some(&Value::Number(1_500_000_000.0))
    );
    assert_eq!(classified.get("LIQUIDEZ"), Some(&Value::Number(2_300_000.0)));
    assert_eq!(classified.get("VACÂNCIA"), Some(&Value::Null));
}

#[test]
fn nulls_stay_null() {
    let view = ViewConfig::new("kpi", &[])
        .strings(&["A"])
        .numerics(&["B"]);
    let mut input = Row::new();
    input.set("A", Value::Null);
    input.set("B", Value::Null);

    let classified = ColumnClassifier::new(&view.groups).classify(input);
    assert!(classified.iter().all(|(_, value)| value.is_null()));
}

#[test]
fn percent_and_date_columns() {
    let view = ViewConfig::new("info", &[])
        .percents(&["VALOR EM CAIXA %"])
        .dates(&["DATA DE CRIAÇÃO"]);
    let classified = ColumnClassifier::new(&view.groups).classify(row(&[
        ("VALOR EM CAIXA %", "3,75"),
        ("DATA DE CRIAÇÃO", "05/01/2010"),
    ]));

    assert_eq!(classified.get("VALOR EM CAIXA %"), Some(&Value::from("3.75%")));
    assert_eq!(classified.get("DATA DE CRIAÇÃO"), Some(&Value::from("2010-01-05")));
}

#[test]
fn numbers_are_read_back_as_text() {
    let view = ViewConfig::new("kpi", &[]).strings(&["P/VP"]);
    let mut input = Row::new();
    input.set("P/VP", Value::Number(1.5));

    let classified = ColumnClassifier::new(&view.groups).classify(input);
    assert_eq!(
        classified.get("P/VP").and_then(Value::as_text),
        Some("1.5")
    );
}
