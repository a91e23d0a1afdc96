use fincard_core::pipeline::{run_asset, AssetSections};
use fincard_core::{ConfigError, Row, SiteConfig, Value};

// Sites described in JSON rather than shipped with the crate.

const SITE: &str = r#"{
    "name": "example",
    "rules": [
        { "pattern": "^DIVIDEND YIELD.*$", "canonical": "DIVIDEND YIELD" }
    ],
    "views": [
        {
            "name": "info",
            "columns": ["TICKET"],
            "string_columns": ["TICKET"]
        },
        {
            "name": "price",
            "columns": ["COTAÇÃO"],
            "renames": { "VALOR ATUAL": "COTAÇÃO" },
            "numeric_columns": ["COTAÇÃO"]
        },
        {
            "name": "kpi",
            "required": false,
            "columns": ["DIVIDEND YIELD"],
            "string_columns": ["DIVIDEND YIELD"]
        }
    ],
    "table": [
        { "name": "TICKET" },
        { "name": "COTAÇÃO", "kind": "numeric" }
    ]
}"#;

#[test]
fn ticker_and_price_row() {
    let site = SiteConfig::from_json(SITE).unwrap();
    let asset: AssetSections = serde_json::from_value(serde_json::json!({
        "ticker": "ABCD3",
        "views": {
            "info": [[ { "label": "TICKET", "value": "ABCD3" } ]],
            "price": [[ { "label": "VALOR ATUAL", "value": "12,34" } ]]
        }
    }))
    .unwrap();

    let rows = run_asset(&site, &asset).unwrap();
    let expected: Row = [
        ("TICKET", Value::from("ABCD3")),
        ("COTAÇÃO", Value::Number(12.34)),
    ]
    .into_iter()
    .collect();
    assert_eq!(rows.table, expected);

    // the optional kpi view is present, all null
    assert_eq!(
        rows.view("kpi").and_then(|row| row.get("DIVIDEND YIELD")),
        Some(&Value::Null)
    );
    assert_eq!(
        serde_json::to_value(&rows.table).unwrap(),
        serde_json::json!({ "TICKET": "ABCD3", "COTAÇÃO": 12.34 })
    );
}

#[test]
fn column_in_two_groups() {
    let site = SITE.replace(
        r#""numeric_columns": ["COTAÇÃO"]"#,
        r#""numeric_columns": ["COTAÇÃO"], "string_columns": ["COTAÇÃO"]"#,
    );
    match SiteConfig::from_json(&site) {
        Err(ConfigError::OverlappingColumns { view, column, .. }) => {
            assert_eq!(view, "price");
            assert_eq!(column, "COTAÇÃO");
        }
        other => panic!("expected overlapping columns, got {other:?}"),
    }
}

#[test]
fn invalid_rule_pattern() {
    let site = SITE.replace("^DIVIDEND YIELD.*$", "^DIVIDEND (YIELD");
    match SiteConfig::from_json(&site) {
        // surfaced through the deserializer
        Err(ConfigError::Json(err)) => assert!(err.to_string().contains("^DIVIDEND (YIELD")),
        other => panic!("expected an invalid pattern, got {other:?}"),
    }
}
