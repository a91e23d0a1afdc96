use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean a file of scraped asset cards into typed rows.
    Clean {
        /// Scraped assets, `{ "assets": [ ... ] }`.
        #[arg(short, long)]
        input: PathBuf,

        /// Builtin site configuration to clean with.
        ///
        /// Defaults to `FINCARD_SITE`, then to investidor10-stocks.
        #[arg(short, long, conflicts_with = "config")]
        site: Option<String>,

        /// Site configuration file (JSON), instead of a builtin site.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the rows here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write missing values as "NO INFORMATION" rather than `null`.
        #[arg(short, long)]
        display: bool,
    },

    /// List the builtin site configurations.
    Sites,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
