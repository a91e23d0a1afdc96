use crate::coerce;
use crate::config::{ColumnKind, OutputSchema};
use crate::record::{Row, Section, Value};
use tracing::{debug, trace};

/// Merge a view's sections into one row holding exactly `columns`, in that order.
///
/// Sections are concatenated in order and transposed; a label defined more than once keeps its
/// last value. A requested column no section provides is `Null`.
pub fn assemble_view<S: AsRef<str>>(sections: &[Section], columns: &[S]) -> Row {
    let mut merged = Row::new();
    for section in sections {
        for (label, value) in Row::from_section(section).iter() {
            if let Some(previous) = merged.get(label) {
                if previous != value {
                    trace!("{label} redefined: {previous:?} -> {value:?}");
                }
            }
            merged.set(label, value.clone());
        }
    }

    let row = merged.project(columns);
    debug!(
        "view assembled: {} of {} columns filled",
        row.iter().filter(|(_, value)| !value.is_null()).count(),
        row.len()
    );
    row
}

/// Merge an asset's views into its final wide row, shaped and typed by `schema`.
///
/// Views are concatenated in order. A column repeated unchanged across views (the ticker, the
/// currency) collapses to one; a column repeated with a different value keeps the last one.
pub fn assemble_asset(views: &[Row], schema: &OutputSchema) -> Row {
    let mut merged = Row::new();
    for view in views {
        for (label, value) in view.iter() {
            merged.set(label, value.clone());
        }
    }

    let mut row = merged.project(&schema.names());
    for column in schema.iter() {
        if let Some(cell) = row.get_mut(&column.name) {
            *cell = present(cell, column.kind);
        }
    }
    row
}

fn present(value: &Value, kind: ColumnKind) -> Value {
    match (kind, value) {
        (ColumnKind::Text, value) => value.clone(),
        (_, Value::Null) => Value::Null,
        (ColumnKind::Numeric | ColumnKind::Percent, Value::Number(number)) => {
            Value::Number(*number)
        }
        (ColumnKind::Numeric | ColumnKind::Percent, Value::Text(text)) => {
            Value::from(coerce::parse_plain_number(text))
        }
        (ColumnKind::PercentText, Value::Number(number)) => {
            Value::Text(coerce::format_percent(*number))
        }
        (ColumnKind::PercentText, Value::Text(text)) => coerce::parse_plain_number(text)
            .map(|number| Value::Text(coerce::format_percent(number)))
            .unwrap_or(Value::Null),
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[cfg(test)]
use crate::config::SchemaColumn;

#[test]
fn later_sections_win() {
    let a: Section = [("FOO", "1"), ("BAR", "a")].into_iter().collect();
    let b: Section = [("FOO", "2")].into_iter().collect();

    let row = assemble_view(&[a, b], &["FOO", "BAR"]);
    assert_eq!(row.get("FOO"), Some(&Value::from("2")));
    assert_eq!(row.get("BAR"), Some(&Value::from("a")));
}

#[test]
fn empty_view_is_all_null() {
    let row = assemble_view(&[], &["X", "Y"]);
    assert_eq!(row.labels().collect::<Vec<_>>(), vec!["X", "Y"]);
    assert!(row.iter().all(|(_, value)| value.is_null()));
    assert_eq!(
        row.to_display().get("X"),
        Some(&Value::from(crate::record::NO_INFORMATION))
    );
}

#[test]
fn unrequested_columns_are_dropped() {
    let section: Section = [("TICKET", "ABCD3"), ("EXTRA", "x")].into_iter().collect();
    let row = assemble_view(&[section], &["TICKET"]);
    assert_eq!(row.len(), 1);
    assert!(!row.contains("EXTRA"));
}

#[test]
fn asset_row_follows_schema() {
    let info: Row = [("TICKET", Value::from("ABCD3")), ("SETOR", Value::from("BANCOS"))]
        .into_iter()
        .collect();
    let price: Row = [
        ("TICKET", Value::from("ABCD3")),
        ("COTAÇÃO", Value::Number(12.34)),
        ("VARIAÇÃO DE COTAÇÃO 1 ANO", Value::from("-4.5%")),
    ]
    .into_iter()
    .collect();
    let kpi: Row = [
        ("TICKET", Value::from("ABCD3")),
        ("DIVIDEND YIELD", Value::from("7.1%")),
        ("P/L", Value::from("ABC")),
        ("PAYOUT", Value::Number(45.0)),
    ]
    .into_iter()
    .collect();

    let schema = OutputSchema(vec![
        SchemaColumn::new("TICKET", ColumnKind::Text),
        SchemaColumn::new("COTAÇÃO", ColumnKind::Numeric),
        SchemaColumn::new("VARIAÇÃO DE COTAÇÃO 1 ANO", ColumnKind::Percent),
        SchemaColumn::new("DIVIDEND YIELD", ColumnKind::Percent),
        SchemaColumn::new("P/L", ColumnKind::Numeric),
        SchemaColumn::new("PAYOUT", ColumnKind::PercentText),
        SchemaColumn::new("VACÂNCIA", ColumnKind::Percent),
    ]);

    let row = assemble_asset(&[info, price, kpi], &schema);
    assert_eq!(row.labels().collect::<Vec<_>>(), schema.names());
    assert_eq!(row.get("TICKET"), Some(&Value::from("ABCD3")));
    assert_eq!(row.get("COTAÇÃO"), Some(&Value::Number(12.34)));
    assert_eq!(row.get("VARIAÇÃO DE COTAÇÃO 1 ANO"), Some(&Value::Number(-4.5)));
    assert_eq!(row.get("DIVIDEND YIELD"), Some(&Value::Number(7.1)));
    assert_eq!(row.get("P/L"), Some(&Value::Null));
    assert_eq!(row.get("PAYOUT"), Some(&Value::from("45.00%")));
    assert_eq!(row.get("VACÂNCIA"), Some(&Value::Null));
    // SETOR is not in the schema
    assert!(!row.contains("SETOR"));
}

#[test]
fn conflicting_views_keep_the_last() {
    let first: Row = [("FOO", Value::from("1"))].into_iter().collect();
    let second: Row = [("FOO", Value::from("2"))].into_iter().collect();
    let row = assemble_asset(&[first, second], &OutputSchema::text(&["FOO"]));
    assert_eq!(row.get("FOO"), Some(&Value::from("2")));
}
