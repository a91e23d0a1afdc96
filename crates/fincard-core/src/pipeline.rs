use crate::assemble::{assemble_asset, assemble_view};
use crate::cards::{clean_cards, LabelRules};
use crate::classify::ColumnClassifier;
use crate::config::{SiteConfig, ViewConfig};
use crate::error::PipelineError;
use crate::payments::{normalize_payments, Payment, RawPayment};
use crate::record::{Row, Section};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, trace, warn};

// de
// -------------------------------------------------------------------------------------------------

// ======
// Input
// ======

// {
//     "ticker": "ABCD3",
//     "views": {
//         "info": [ [ {"label": "TICKET", "value": "ABCD3"} ], [ ... ] ],
//         "price": [ ... ],
//         ...
//     },
//     "payments": [ {"ex_date": "Feb. 14, 2024", "pay_date": "...", "value": "0.75"} ]
// }
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AssetSections {
    pub ticker: String,
    /// View name -> the sections scraped for it, in page order.
    #[serde(default)]
    pub views: HashMap<String, Vec<Section>>,
    #[serde(default)]
    pub payments: Vec<RawPayment>,
}

/// A scraped batch file: `{ "assets": [ ... ] }`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ScrapedAssets {
    pub assets: Vec<AssetSections>,
}

// ======
// Output
// ======

#[derive(Clone, Debug, Serialize)]
pub struct ViewRow {
    pub view: String,
    pub row: Row,
}

#[derive(Clone, Debug, Serialize)]
pub struct AssetRows {
    pub ticker: String,
    pub views: Vec<ViewRow>,
    pub table: Row,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<Payment>,
}

impl AssetRows {
    pub fn view(&self, name: &str) -> Option<&Row> {
        self.views
            .iter()
            .find(|view| view.view == name)
            .map(|view| &view.row)
    }

    /// The presentation form: every `Null` replaced by the display sentinel.
    pub fn to_display(&self) -> Self {
        Self {
            ticker: self.ticker.clone(),
            views: self
                .views
                .iter()
                .map(|view| ViewRow {
                    view: view.view.clone(),
                    row: view.row.to_display(),
                })
                .collect(),
            table: self.table.to_display(),
            payments: self.payments.clone(),
        }
    }
}

// run
// -------------------------------------------------------------------------------------------------

/// Clean, merge and type the sections of one view.
pub fn run_view(
    rules: &LabelRules,
    view: &ViewConfig,
    sections: &[Section],
) -> Result<Row, PipelineError> {
    let scraped: usize = sections.iter().map(Section::len).sum();
    if scraped == 0 {
        if view.required {
            error!("no records scraped for required view `{}`", view.name);
            return Err(PipelineError::EmptySection {
                view: view.name.clone(),
            });
        }
        trace!("optional view `{}` is empty", view.name);
    }

    let cleaned: Vec<Section> = sections
        .iter()
        .cloned()
        .map(|section| clean_cards(section, rules).rename_labels(&view.renames))
        .collect();

    let row = assemble_view(&cleaned, &view.columns);
    Ok(ColumnClassifier::new(&view.groups).classify(row))
}

/// Run every configured view of one asset and merge them into its table row.
pub fn run_asset(site: &SiteConfig, asset: &AssetSections) -> Result<AssetRows, PipelineError> {
    let time = std::time::Instant::now();
    site.validate()?;

    for unknown in asset.views.keys().filter(|name| site.view(name).is_none()) {
        warn!(
            "[{}] view `{unknown}` is not configured for site `{}`; skipped",
            asset.ticker, site.name
        );
    }

    let mut views = Vec::with_capacity(site.views.len());
    for view in &site.views {
        let sections = asset
            .views
            .get(&view.name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let row = run_view(&site.rules, view, sections).map_err(|err| {
            warn!("[{}] view `{}` failed: {err}", asset.ticker, view.name);
            err
        })?;
        views.push(ViewRow {
            view: view.name.clone(),
            row,
        });
    }

    let rows: Vec<Row> = views.iter().map(|view| view.row.clone()).collect();
    let table = assemble_asset(&rows, &site.table);
    let payments = normalize_payments(&asset.ticker, asset.payments.clone());

    debug!(
        "[{}] assembled {} views, time elapsed: {:?}",
        asset.ticker,
        views.len(),
        time.elapsed()
    );

    Ok(AssetRows {
        ticker: asset.ticker.clone(),
        views,
        table,
        payments,
    })
}

/// Run many assets in parallel; each asset succeeds or fails on its own.
///
/// `inspect` sees every result as soon as its asset is done (progress reporting), results are
/// returned in input order.
pub fn run_batch<F>(
    site: &SiteConfig,
    assets: &[AssetSections],
    threads: usize,
    inspect: F,
) -> Vec<Result<AssetRows, PipelineError>>
where
    F: Fn(&Result<AssetRows, PipelineError>) + Sync,
{
    let run = || {
        assets
            .par_iter()
            .map(|asset| {
                let result = run_asset(site, asset);
                inspect(&result);
                result
            })
            .collect::<Vec<_>>()
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(run),
        Err(err) => {
            warn!("failed to build a {threads} thread pool, using the global pool: {err}");
            run()
        }
    }
}

/// Worker count for [`run_batch`]: `CONCURRENT_THREADS` when set, otherwise one per CPU.
pub fn num_concurrent_threads() -> usize {
    match dotenv::var("CONCURRENT_THREADS") {
        Ok(threads) => threads.parse::<usize>().unwrap_or_else(|err| {
            warn!("invalid CONCURRENT_THREADS `{threads}` ({err}); using one thread per CPU");
            num_cpus::get()
        }),
        Err(_) => num_cpus::get(),
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[cfg(test)]
use crate::config::{ColumnKind, OutputSchema};
#[cfg(test)]
use crate::record::Value;

#[cfg(test)]
fn site() -> SiteConfig {
    SiteConfig {
        name: "test".to_string(),
        rules: LabelRules::portuguese(),
        views: vec![
            ViewConfig::new("info", &["TICKET"]).strings(&["TICKET"]),
            ViewConfig::new("price", &["COTAÇÃO"])
                .renames(&[("VALOR ATUAL", "COTAÇÃO")])
                .numerics(&["COTAÇÃO"]),
            ViewConfig::new("kpi", &["DIVIDEND YIELD"])
                .strings(&["DIVIDEND YIELD"])
                .optional(),
        ],
        table: OutputSchema::text(&["TICKET", "COTAÇÃO", "DIVIDEND YIELD"])
            .with_kind(&["COTAÇÃO"], ColumnKind::Numeric),
    }
}

#[cfg(test)]
fn asset(views: &[(&str, &[(&str, &str)])]) -> AssetSections {
    AssetSections {
        ticker: "ABCD3".to_string(),
        views: views
            .iter()
            .map(|(name, records)| {
                let section: Section = records.iter().copied().collect();
                (name.to_string(), vec![section])
            })
            .collect(),
        payments: vec![],
    }
}

#[test]
fn ticker_and_price() {
    let rows = run_asset(
        &site(),
        &asset(&[
            ("info", &[("TICKET", "ABCD3")]),
            ("price", &[("VALOR ATUAL", "12,34")]),
        ]),
    )
    .expect("asset runs");

    let expected: Row = [
        ("TICKET", Value::from("ABCD3")),
        ("COTAÇÃO", Value::Number(12.34)),
        ("DIVIDEND YIELD", Value::Null),
    ]
    .into_iter()
    .collect();
    assert_eq!(rows.table, expected);
    assert_eq!(
        rows.view("price").and_then(|row| row.get("COTAÇÃO")),
        Some(&Value::Number(12.34))
    );
}

#[test]
fn required_view_without_records() {
    let err = run_asset(&site(), &asset(&[("info", &[("TICKET", "ABCD3")])]))
        .expect_err("price is required");
    assert!(matches!(err, PipelineError::EmptySection { view } if view == "price"));
}

#[test]
fn unknown_views_are_skipped() {
    let rows = run_asset(
        &site(),
        &asset(&[
            ("info", &[("TICKET", "ABCD3")]),
            ("price", &[("VALOR ATUAL", "1")]),
            ("balance", &[("ATIVOS", "1")]),
        ]),
    )
    .expect("unconfigured views do not fail the asset");
    assert!(rows.view("balance").is_none());
    assert_eq!(rows.views.len(), 3);
    assert!(!rows.table.contains("ATIVOS"));
    assert_eq!(rows.table.get("COTAÇÃO"), Some(&Value::Number(1.0)));
}

#[test]
fn labels_are_canonicalized_before_renames() {
    let rows = run_asset(
        &site(),
        &asset(&[
            ("info", &[("TICKET", "ABCD3")]),
            ("price", &[("VALOR ATUAL", "R$ 10,00")]),
            ("kpi", &[("DIVIDEND YIELD (12M)", "7,1 ARROW_UPWARD%")]),
        ]),
    )
    .expect("asset runs");

    assert_eq!(rows.table.get("COTAÇÃO"), Some(&Value::Number(10.0)));
    assert_eq!(rows.table.get("DIVIDEND YIELD"), Some(&Value::from("7.1%")));
}

#[test]
fn invalid_site_is_a_config_error() {
    let mut site = site();
    site.views[1].groups.string_columns = vec!["COTAÇÃO".to_string()];
    let err = run_asset(&site, &asset(&[("info", &[("TICKET", "ABCD3")])]))
        .expect_err("overlapping groups");
    assert!(matches!(err, PipelineError::Config(_)));
}

#[test]
fn batch_keeps_failures_apart() {
    let good = asset(&[
        ("info", &[("TICKET", "ABCD3")]),
        ("price", &[("VALOR ATUAL", "12,34")]),
    ]);
    let bad = asset(&[("info", &[("TICKET", "WXYZ4")])]);

    let results = run_batch(&site(), &[good, bad], 2, |_| {});
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn display_fills_missing_cells() {
    let rows = run_asset(
        &site(),
        &asset(&[
            ("info", &[("TICKET", "ABCD3")]),
            ("price", &[("VALOR ATUAL", "-")]),
        ]),
    )
    .expect("asset runs");

    assert_eq!(rows.table.get("COTAÇÃO"), Some(&Value::Null));
    let display = rows.to_display();
    assert_eq!(
        display.table.get("COTAÇÃO"),
        Some(&Value::from(crate::record::NO_INFORMATION))
    );
}
