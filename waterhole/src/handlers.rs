use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use waterhole_core::{ProbeOptions, execute_probe, generate_probe_summary, load_list, write_report};
use waterhole_scanner::{ProbeConfig, ProbeReport};

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub paths_file: PathBuf,
    pub scope_file: PathBuf,
    pub results_file: PathBuf,
    pub errors_file: PathBuf,
    pub config: ProbeConfig,
    pub quiet: bool,
}

impl RunSettings {
    pub fn from_matches(args: &ArgMatches) -> Self {
        let path_arg = |name: &str| {
            args.get_one::<String>(name)
                .map(|raw| expand_path(raw))
                .unwrap_or_default()
        };

        let mut config = ProbeConfig::default();
        if let Some(timeout) = args.get_one::<u64>("timeout") {
            config = config.with_timeout(Duration::from_secs(*timeout));
        }
        if let Some(max_redirects) = args.get_one::<usize>("max-redirects") {
            config = config.with_max_redirects(*max_redirects);
        }
        if let Some(user_agent) = args.get_one::<String>("user-agent") {
            config = config.with_user_agent(user_agent.as_str());
        }

        Self {
            paths_file: path_arg("paths"),
            scope_file: path_arg("scope"),
            results_file: path_arg("results"),
            errors_file: path_arg("errors"),
            config,
            quiet: args.get_flag("quiet"),
        }
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// Load both lists, probe the cross product and write both CSV files.
///
/// Input errors abort before the first request is sent.
pub async fn run_probe(settings: &RunSettings) -> anyhow::Result<ProbeReport> {
    let paths = load_list(&settings.paths_file)
        .with_context(|| format!("Cannot load paths from {}", settings.paths_file.display()))?;
    let domains = load_list(&settings.scope_file)
        .with_context(|| format!("Cannot load scope from {}", settings.scope_file.display()))?;

    info!(
        "Loaded {} paths and {} domains",
        paths.len(),
        domains.len()
    );

    let options = ProbeOptions {
        paths,
        domains,
        config: settings.config.clone(),
        show_progress_bar: !settings.quiet,
    };

    let report = execute_probe(options).await?;

    write_report(&report, &settings.results_file, &settings.errors_file)
        .context("Cannot write probe results")?;

    Ok(report)
}

fn print_output_location(label: &str, path: &Path, rows: usize) {
    println!(
        "{} {} {} ({} rows)",
        "✓".green().bold(),
        label,
        path.display().to_string().bright_white(),
        rows.to_string().cyan()
    );
}

pub async fn handle_probe(args: &ArgMatches) {
    let settings = RunSettings::from_matches(args);

    if !settings.quiet {
        println!(
            "\n{} {} x {}",
            "Probing".bright_blue().bold(),
            settings.paths_file.display().to_string().bright_white(),
            settings.scope_file.display().to_string().bright_white()
        );
        println!("Timeout: {}s\n", settings.config.timeout.as_secs());
    }

    let report = match run_probe(&settings).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    if !settings.quiet {
        print!("{}", generate_probe_summary(&report));
        print_output_location("Results:", &settings.results_file, report.results.len());
        print_output_location("Errors: ", &settings.errors_file, report.errors.len());
    }
}
