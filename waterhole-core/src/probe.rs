// Probe runs: one GET per path x domain pair, issued sequentially

use crate::error::{CoreError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::info;
use waterhole_scanner::{ProbeConfig, ProbeOutcome, ProbeReport, Prober, ProgressCallback};

/// Options for configuring a probe run
pub struct ProbeOptions {
    pub paths: Vec<String>,
    pub domains: Vec<String>,
    pub config: ProbeConfig,
    pub show_progress_bar: bool,
}

/// Execute a probe run with the given options
pub async fn execute_probe(options: ProbeOptions) -> Result<ProbeReport> {
    let ProbeOptions {
        paths,
        domains,
        config,
        show_progress_bar,
    } = options;

    if paths.is_empty() {
        return Err(CoreError::NoTargets("paths"));
    }

    if domains.is_empty() {
        return Err(CoreError::NoTargets("domains"));
    }

    let total = paths.len() * domains.len();

    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(Arc::new(pb))
    } else {
        None
    };

    let mut prober = Prober::new(config)?;
    info!(
        "Probing {} URLs with a {}s timeout",
        total,
        prober.config().timeout.as_secs_f32()
    );

    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        let callback: ProgressCallback = Arc::new(move |_idx: usize, outcome: &ProbeOutcome| {
            pb_clone.set_message(outcome.website().to_string());
            pb_clone.inc(1);
        });
        prober = prober.with_progress_callback(callback);
    }

    let report = prober.run(&paths, &domains).await;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("done, {} URLs probed", report.total()));
    }

    Ok(report)
}
