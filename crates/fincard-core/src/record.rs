use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Display sentinel written in place of a missing value at the presentation boundary.
pub const NO_INFORMATION: &str = "NO INFORMATION";

// input
// -------------------------------------------------------------------------------------------------

/// One scraped fact, exactly as the page rendered it.
///
/// Either side may be missing: the label when the scraper could not find the element, the value
/// when the element existed but was empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub label: Option<String>,
    pub value: Option<String>,
}

impl Record {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            value: Some(value.to_string()),
        }
    }
}

/// An ordered list of records scraped from one page region ("company", "price", "kpi", ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Section(pub Vec<Record>);

impl Section {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    /// Replace labels found in `renames` with their mapped name; unknown labels are untouched.
    pub fn rename_labels(mut self, renames: &HashMap<String, String>) -> Self {
        if renames.is_empty() {
            return self;
        }
        for record in self.0.iter_mut() {
            if let Some(renamed) = record.label.as_ref().and_then(|label| renames.get(label)) {
                record.label = Some(renamed.clone());
            }
        }
        self
    }
}

impl From<Vec<Record>> for Section {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Section {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, value)| Record::new(label, value))
                .collect(),
        )
    }
}

// output
// -------------------------------------------------------------------------------------------------

/// A typed cell of an assembled row.
///
/// `Null` is the only representation of "no data" inside the pipeline; the [`NO_INFORMATION`]
/// sentinel only appears through [`Row::to_display`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::Text)
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

/// One asset's record: an ordered mapping from canonical label to typed value.
///
/// Labels are unique; setting an existing label overwrites its value in place, which is what
/// gives concatenated sections their last-wins behaviour.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transpose a section into a row; a repeated label keeps its last value.
    pub fn from_section(section: &Section) -> Self {
        let mut row = Row::new();
        for record in section.iter() {
            if let Some(label) = &record.label {
                row.set(label, Value::from(record.value.clone()));
            }
        }
        row
    }

    pub fn set(&mut self, label: &str, value: Value) {
        match self.cells.iter_mut().find(|(existing, _)| existing == label) {
            Some((_, cell)) => *cell = value,
            None => self.cells.push((label.to_string(), value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Value> {
        self.cells
            .iter_mut()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rebuild the row with exactly `columns`, in that order; absent columns become `Null`.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Row {
        let mut row = Row::new();
        for column in columns {
            let column = column.as_ref();
            row.set(column, self.get(column).cloned().unwrap_or_default());
        }
        row
    }

    /// Presentation form of the row: every `Null` becomes [`NO_INFORMATION`].
    pub fn to_display(&self) -> Row {
        Row {
            cells: self
                .cells
                .iter()
                .map(|(label, value)| {
                    let value = match value {
                        Value::Null => Value::Text(NO_INFORMATION.to_string()),
                        other => other.clone(),
                    };
                    (label.clone(), value)
                })
                .collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (&'a str, Value)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (label, value) in iter {
            row.set(label, value);
        }
        row
    }
}

// a row serializes as a JSON object that keeps the column order
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (label, value) in &self.cells {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[test]
fn transposed_section_keeps_last_value() {
    let section: Section = [("FOO", "1"), ("BAR", "x"), ("FOO", "2")].into_iter().collect();
    let row = Row::from_section(&section);

    assert_eq!(row.len(), 2);
    assert_eq!(row.get("FOO"), Some(&Value::from("2")));
    assert_eq!(row.labels().collect::<Vec<_>>(), vec!["FOO", "BAR"]);
}

#[test]
fn projection_fills_and_orders() {
    let row: Row = [("B", Value::from(1.0)), ("A", Value::from("a"))]
        .into_iter()
        .collect();
    let projected = row.project(&["A", "C", "B"]);

    assert_eq!(projected.labels().collect::<Vec<_>>(), vec!["A", "C", "B"]);
    assert_eq!(projected.get("C"), Some(&Value::Null));
    assert_eq!(
        projected.to_display().get("C"),
        Some(&Value::from(NO_INFORMATION))
    );
}

#[test]
fn row_serializes_in_column_order() {
    let row: Row = [
        ("TICKET", Value::from("ABCD3")),
        ("COTAÇÃO", Value::from(12.34)),
        ("SETOR", Value::Null),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&row).expect("serialize row");
    assert_eq!(json, r#"{"TICKET":"ABCD3","COTAÇÃO":12.34,"SETOR":null}"#);
}
