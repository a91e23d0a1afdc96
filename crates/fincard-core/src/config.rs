use crate::cards::LabelRules;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// How the final table presents one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Left as produced by its view.
    #[default]
    Text,
    /// Parsed into a float.
    Numeric,
    /// Trailing `%` dropped, then parsed into a bare float (`12.5%` -> `12.5`).
    Percent,
    /// Rendered as an `N.NN%` display string.
    PercentText,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemaColumn {
    pub name: String,
    #[serde(default)]
    pub kind: ColumnKind,
}

impl SchemaColumn {
    pub fn new(name: &str, kind: ColumnKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// The ordered columns of an assembled table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OutputSchema(pub Vec<SchemaColumn>);

impl OutputSchema {
    /// Every column as [`ColumnKind::Text`].
    pub fn text(names: &[&str]) -> Self {
        Self(
            names
                .iter()
                .map(|name| SchemaColumn::new(name, ColumnKind::Text))
                .collect(),
        )
    }

    /// Mark `names` with `kind`; names not in the schema are ignored.
    pub fn with_kind(mut self, names: &[&str], kind: ColumnKind) -> Self {
        for column in self.0.iter_mut() {
            if names.contains(&column.name.as_str()) {
                column.kind = kind;
            }
        }
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaColumn> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which coercion each column of a view receives; a column belongs to one group at most.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnGroups {
    #[serde(default)]
    pub string_columns: Vec<String>,
    #[serde(default)]
    pub numeric_columns: Vec<String>,
    /// Percentages printed without their sign; the `%` is added back.
    #[serde(default)]
    pub percent_columns: Vec<String>,
    /// `dd/mm/yyyy` dates, rewritten as ISO dates.
    #[serde(default)]
    pub date_columns: Vec<String>,
    /// Amounts written with a scale word (`1,5 BILHÕES`).
    #[serde(default)]
    pub word_scaled_columns: Vec<String>,
    /// Amounts written with a scale letter (`1,5 M`).
    #[serde(default)]
    pub letter_scaled_columns: Vec<String>,
}

impl ColumnGroups {
    fn named(&self) -> [(&'static str, &Vec<String>); 6] {
        [
            ("string", &self.string_columns),
            ("numeric", &self.numeric_columns),
            ("percent", &self.percent_columns),
            ("date", &self.date_columns),
            ("word-scaled", &self.word_scaled_columns),
            ("letter-scaled", &self.letter_scaled_columns),
        ]
    }
}

/// One logical output slice of an asset (info, price, kpi, ...).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewConfig {
    pub name: String,
    /// A required view with no records at all is an error rather than a row of nulls.
    #[serde(default = "required_by_default")]
    pub required: bool,
    /// Site label -> canonical label, applied after card cleaning.
    #[serde(default)]
    pub renames: HashMap<String, String>,
    /// The view's columns, in output order.
    pub columns: Vec<String>,
    #[serde(flatten)]
    pub groups: ColumnGroups,
}

fn required_by_default() -> bool {
    true
}

impl ViewConfig {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            renames: HashMap::new(),
            columns: to_strings(columns),
            groups: ColumnGroups::default(),
        }
    }

    pub fn renames(mut self, renames: &[(&str, &str)]) -> Self {
        self.renames = renames
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        self
    }

    pub fn strings(mut self, columns: &[&str]) -> Self {
        self.groups.string_columns = to_strings(columns);
        self
    }

    pub fn numerics(mut self, columns: &[&str]) -> Self {
        self.groups.numeric_columns = to_strings(columns);
        self
    }

    pub fn percents(mut self, columns: &[&str]) -> Self {
        self.groups.percent_columns = to_strings(columns);
        self
    }

    pub fn dates(mut self, columns: &[&str]) -> Self {
        self.groups.date_columns = to_strings(columns);
        self
    }

    pub fn word_scaled(mut self, columns: &[&str]) -> Self {
        self.groups.word_scaled_columns = to_strings(columns);
        self
    }

    pub fn letter_scaled(mut self, columns: &[&str]) -> Self {
        self.groups.letter_scaled_columns = to_strings(columns);
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Reject a column that sits in two coercion groups.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, &'static str> = HashMap::new();
        for (group, columns) in self.groups.named() {
            for column in columns {
                match seen.insert(column.as_str(), group) {
                    Some(first) if first != group => {
                        return Err(ConfigError::OverlappingColumns {
                            view: self.name.clone(),
                            column: column.clone(),
                            first,
                            second: group,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

/// Everything the pipeline needs to know about one site and asset class.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub rules: LabelRules,
    pub views: Vec<ViewConfig>,
    /// Schema of the combined table built from every view.
    pub table: OutputSchema,
}

impl SiteConfig {
    /// Parse a site config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            "site config `{}` loaded with {} views",
            config.name,
            config.views.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for view in &self.views {
            if !names.insert(view.name.as_str()) {
                return Err(ConfigError::DuplicateView(view.name.clone()));
            }
            view.validate()?;
        }
        Ok(())
    }

    pub fn view(&self, name: &str) -> Option<&ViewConfig> {
        self.views.iter().find(|view| view.name == name)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[test]
fn overlapping_groups_are_rejected() {
    let view = ViewConfig::new("kpi", &["P/L"])
        .strings(&["P/L"])
        .numerics(&["P/L"]);

    match view.validate() {
        Err(ConfigError::OverlappingColumns {
            column,
            first,
            second,
            ..
        }) => {
            assert_eq!(column, "P/L");
            assert_eq!(first, "string");
            assert_eq!(second, "numeric");
        }
        other => panic!("expected overlapping columns, got {other:?}"),
    }
}

#[test]
fn site_config_from_json() {
    let json = r#"{
        "name": "example",
        "rules": [{"pattern": "^DIVIDEND YIELD.*$", "canonical": "DIVIDEND YIELD"}],
        "views": [
            {
                "name": "price",
                "renames": {"VALOR ATUAL": "COTAÇÃO"},
                "columns": ["TICKET", "COTAÇÃO"],
                "numeric_columns": ["COTAÇÃO"]
            },
            {
                "name": "kpi",
                "required": false,
                "columns": ["TICKET", "DIVIDEND YIELD"],
                "string_columns": ["DIVIDEND YIELD"]
            }
        ],
        "table": [
            {"name": "TICKET"},
            {"name": "COTAÇÃO", "kind": "numeric"},
            {"name": "DIVIDEND YIELD", "kind": "percent"}
        ]
    }"#;

    let site = SiteConfig::from_json(json).expect("valid site config");
    assert_eq!(site.views.len(), 2);
    assert!(site.view("price").expect("price view").required);
    assert!(!site.view("kpi").expect("kpi view").required);
    assert_eq!(site.table.0[1].kind, ColumnKind::Numeric);
    assert_eq!(site.table.0[0].kind, ColumnKind::Text);
    assert_eq!(site.rules.len(), 1);
}

#[test]
fn percent_and_date_groups_overlap_too() {
    let view = ViewConfig::new("info", &["DATA DE CRIAÇÃO"])
        .dates(&["DATA DE CRIAÇÃO"])
        .percents(&["DATA DE CRIAÇÃO"]);
    assert!(matches!(
        view.validate(),
        Err(ConfigError::OverlappingColumns { first: "percent", second: "date", .. })
    ));

    let json = r#"{
        "name": "kpi",
        "columns": ["VALOR EM CAIXA %", "DATA DE CRIAÇÃO"],
        "percent_columns": ["VALOR EM CAIXA %"],
        "date_columns": ["DATA DE CRIAÇÃO"]
    }"#;
    let view: ViewConfig = serde_json::from_str(json).expect("valid view");
    assert_eq!(view.groups.percent_columns, vec!["VALOR EM CAIXA %"]);
    assert_eq!(view.groups.date_columns, vec!["DATA DE CRIAÇÃO"]);
    view.validate().expect("distinct groups");
}

#[test]
fn duplicate_views_are_rejected() {
    let json = r#"{
        "name": "twice",
        "views": [
            {"name": "info", "columns": ["TICKET"]},
            {"name": "info", "columns": ["TICKET"]}
        ],
        "table": [{"name": "TICKET"}]
    }"#;
    assert!(matches!(
        SiteConfig::from_json(json),
        Err(ConfigError::DuplicateView(view)) if view == "info"
    ));
}
