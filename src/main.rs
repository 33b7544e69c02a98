// Entry point of the batch cleaner. All logic lives in the library crate.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use svgclean_batch_lib::cli::Cli;
use svgclean_batch_lib::commands::{clean_files, scan_inputs};
use svgclean_batch_lib::core::{AppState, CleanOutput, Progress, ProgressType, Settings};
use svgclean_batch_lib::processing::{BatchConfig, CleanerProcess};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_result(progress: &Progress) {
    let Some(result) = &progress.result else {
        return;
    };
    let counter = format!("[{}/{}]", progress.completed_tasks, progress.total_tasks);

    match result {
        CleanOutput::Ok { data, .. } => println!(
            "{counter} ok      {} ({} bytes, {:.2}%)",
            data.output_path.display(), data.out_size, data.ratio
        ),
        CleanOutput::Warning { data, message, .. } => println!(
            "{counter} warning {} ({} bytes, {:.2}%)\n    {}",
            data.output_path.display(), data.out_size, data.ratio, message.replace('\n', "\n    ")
        ),
        CleanOutput::Error { item, message } => println!(
            "{counter} error   {item}\n    {}",
            message.replace('\n', "\n    ")
        ),
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = cli.apply(settings);
    settings.validate()?;
    debug!("Effective settings: {:?}", settings);

    let cleaner = CleanerProcess::locate(&settings.cleaner)?
        .with_timeout(Duration::from_secs(settings.timeout_secs));
    let state = AppState::new(cleaner, BatchConfig::with_jobs(settings.jobs));
    state
        .check_cleaner()
        .await
        .context("the cleaner could not be started")?;

    let tasks = scan_inputs(&cli.input, cli.output.as_deref(), cli.recursive, &settings)?;
    if tasks.is_empty() {
        info!("No SVG files found in '{}'", cli.input.display());
        return Ok(true);
    }

    let outcome = clean_files(&state, tasks, |progress| {
        if progress.progress_type != ProgressType::Start {
            print_result(&progress);
        }
    })
    .await?;

    if let Some(report) = &cli.report {
        let json = serde_json::to_string_pretty(&outcome).context("failed to serialize the report")?;
        std::fs::write(report, json)
            .with_context(|| format!("failed to write report '{}'", report.display()))?;
        info!("Report written to '{}'", report.display());
    }

    Ok(outcome.summary.errors == 0)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("=== svgclean-batch starting ===");
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
