use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

/// Total, success and failure bars for a batch of assets.
#[derive(Clone)]
pub(crate) struct Progress {
    pub(crate) total: ProgressBar,
    pub(crate) successes: ProgressBar,
    pub(crate) failures: ProgressBar,
}

impl Progress {
    pub(crate) fn new(len: usize, tui: bool) -> anyhow::Result<Self> {
        if !tui {
            return Ok(Self::hidden());
        }

        // overall multi progress bar
        let multi = MultiProgress::new();

        // total number of assets to clean
        let total = multi.add(
            ProgressBar::new(len as u64).with_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.magenta}\n \
                            {msg:>9.white} |{bar:57.white/grey}| {pos:<2} / {human_len} \
                            ({percent_precise}%) [Time: {elapsed}, Rate: {per_sec}, ETA: {eta}]",
                    )?
                    .progress_chars("## "),
            ),
        );
        total.set_message("total");
        total.enable_steady_tick(Duration::from_millis(100));

        let successes = multi.insert_after(
            &total,
            ProgressBar::new(len as u64).with_style(
                ProgressStyle::default_bar()
                    .template(" {msg:>9.green} |{bar:57.green}| {pos:<2.green}")?
                    .progress_chars("## "),
            ),
        );
        successes.set_message("successes");

        let failures = multi.insert_after(
            &successes,
            ProgressBar::new(len as u64).with_style(
                ProgressStyle::default_bar()
                    .template(" {msg:>9.red} |{bar:57.red}| {pos:<2.red}")?
                    .progress_chars("## "),
            ),
        );
        failures.set_message("failures");

        Ok(Self {
            total,
            successes,
            failures,
        })
    }

    fn hidden() -> Self {
        Self {
            total: ProgressBar::hidden(),
            successes: ProgressBar::hidden(),
            failures: ProgressBar::hidden(),
        }
    }

    pub(crate) fn record(&self, success: bool) {
        self.total.inc(1);
        match success {
            true => self.successes.inc(1),
            false => self.failures.inc(1),
        }
    }

    pub(crate) fn finish(&self) {
        self.total.finish_and_clear();
        self.successes.finish_and_clear();
        self.failures.finish_and_clear();
    }
}
