use indicatif::{ProgressBar, ProgressStyle};

const BATCH_TEMPLATE: &str =
    "Analyzing {spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%)";

/// Progress bar for a batch run over `total` lines.
pub fn batch_progress_bar(total: u64) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(BATCH_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    ProgressBar::new(total).with_style(style)
}
