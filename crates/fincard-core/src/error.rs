use thiserror::Error;

/// Structural failures the pipeline surfaces to its caller.
///
/// Parsing failures never show up here: an unparsable value becomes `Null`, and a missing column
/// is filled in by the assembler.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required view came in without a single record; scraping upstream most likely failed.
    #[error("no records scraped for required view `{view}`")]
    EmptySection { view: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Problems with a site configuration, found when it is loaded or validated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid label pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("column `{column}` of view `{view}` is listed as both {first} and {second}")]
    OverlappingColumns {
        view: String,
        column: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("view `{0}` is configured more than once")]
    DuplicateView(String),

    #[error("unknown site `{0}`")]
    UnknownSite(String),

    #[error("failed to parse site config: {0}")]
    Json(#[from] serde_json::Error),
}
