use crate::fs;
use crate::tui::Progress;
use colored::Colorize;
use dotenv::var;
use fincard_core::pipeline::{num_concurrent_threads, run_batch, AssetRows, ScrapedAssets};
use fincard_core::{sites, SiteConfig};
use std::path::PathBuf;
use tracing::{debug, error, info, trace};

const DEFAULT_SITE: &str = "investidor10-stocks";

pub(crate) struct CleanArgs {
    pub(crate) input: PathBuf,
    pub(crate) site: Option<String>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) display: bool,
}

/// Clean a scraped batch and write its rows.
pub(crate) async fn clean(args: CleanArgs, tui: bool) -> anyhow::Result<()> {
    let time = std::time::Instant::now();

    // 1. site configuration
    let site = load_site(args.site, args.config).await?;
    debug!("cleaning with site `{}`", site.name);

    // 2. scraped cards
    let scraped: ScrapedAssets = fs::read_json(&args.input).await.map_err(|err| {
        error!("failed to read scraped assets from {:?}: {err}", args.input);
        err
    })?;
    let len = scraped.assets.len();
    info!("{len} assets read from {:?}", args.input);

    // 3. run the pipeline off the async runtime
    let threads = num_concurrent_threads();
    trace!("cleaning on {threads} threads");
    let progress = Progress::new(len, tui)?;
    let bars = progress.clone();
    let results = tokio::task::spawn_blocking(move || {
        run_batch(&site, &scraped.assets, threads, |result| {
            bars.record(result.is_ok())
        })
        .into_iter()
        .zip(scraped.assets.iter().map(|asset| asset.ticker.clone()))
        .collect::<Vec<_>>()
    })
    .await?;
    progress.finish();

    let mut rows: Vec<AssetRows> = Vec::with_capacity(len);
    let mut failures = 0;
    for (result, ticker) in results {
        match result {
            Ok(asset) if args.display => rows.push(asset.to_display()),
            Ok(asset) => rows.push(asset),
            Err(err) => {
                failures += 1;
                error!("[{ticker}] {err}");
                if tui {
                    eprintln!("{} {ticker}: {err}", "failed".red());
                }
            }
        }
    }

    // 4. output
    match &args.output {
        Some(path) => fs::write_json(path, &rows).await?,
        None => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    info!(
        "{} of {len} assets cleaned, time elapsed: {:?}",
        rows.len(),
        time.elapsed()
    );
    if tui {
        let summary = format!("{} of {len} assets cleaned", rows.len());
        match failures {
            0 => eprintln!("{}", summary.green()),
            _ => eprintln!("{} ({failures} failed)", summary.yellow()),
        }
    }

    Ok(())
}

/// Print the builtin site names.
pub(crate) fn list_sites() {
    for name in sites::BUILTIN_SITES {
        match sites::builtin(name) {
            Ok(site) => println!(
                "{} ({} views, {} columns)",
                name.bold(),
                site.views.len(),
                site.table.len()
            ),
            Err(err) => error!("builtin site `{name}` is invalid: {err}"),
        }
    }
}

async fn load_site(site: Option<String>, config: Option<PathBuf>) -> anyhow::Result<SiteConfig> {
    if let Some(path) = config {
        trace!("reading site config from {path:?}");
        let json = tokio::fs::read_to_string(&path).await?;
        return SiteConfig::from_json(&json).map_err(|err| {
            error!("invalid site config {path:?}: {err}");
            err.into()
        });
    }

    let name = site
        .or_else(|| var("FINCARD_SITE").ok())
        .unwrap_or_else(|| DEFAULT_SITE.to_string());
    Ok(sites::builtin(&name)?)
}
