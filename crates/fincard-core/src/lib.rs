//! Turn scraped asset "cards" (label/value pairs) into typed, schema-shaped rows.
//!
//! Each asset page is scraped into [`Section`]s grouped by view (info, price, kpi, ...). A
//! [`SiteConfig`] describes how one site's labels are canonicalized, which columns each view
//! keeps, and how each column is coerced; [`pipeline::run_asset`] does the rest.

pub mod assemble;
pub mod cards;
pub mod classify;
pub mod coerce;
pub mod config;
pub mod error;
pub mod payments;
pub mod pipeline;
pub mod record;
pub mod sites;

pub use cards::{clean_cards, LabelRule, LabelRules};
pub use config::{ColumnGroups, ColumnKind, OutputSchema, SchemaColumn, SiteConfig, ViewConfig};
pub use error::{ConfigError, PipelineError};
pub use pipeline::{run_asset, run_batch, run_view, AssetRows, AssetSections, ScrapedAssets};
pub use record::{Record, Row, Section, Value, NO_INFORMATION};
