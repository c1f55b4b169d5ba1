use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stereo_point_count::cli::{self, CliAction, CONFIG_ENV};
use stereo_point_count::error::ConfigError;
use stereo_point_count::models::RunConfig;
use stereo_point_count::services::{resolve_images, BatchRunner, CsvReport, PointCounter};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the CSV report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stereo_point_count=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();

    let env_config = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

    let config = match cli::parse_args(std::env::args_os(), env_config) {
        Ok(CliAction::Run(config)) => config,
        Ok(CliAction::Print(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(e @ ConfigError::NoArguments) => {
            println!("{}", cli::usage());
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Count every image and stream the report to stdout.
fn run(config: &RunConfig) -> anyhow::Result<()> {
    // The reported time covers discovery as well as counting
    let runner = BatchRunner::new(PointCounter::new(config));
    let images = resolve_images(&config.images);

    let mut report = CsvReport::new(io::stdout().lock());
    let outcome = runner
        .run(&images, &mut report)
        .context("Failed to write report")?;

    for skipped in &outcome.skipped {
        eprintln!("error: {}: {}", skipped.path.display(), skipped.error);
    }
    Ok(())
}
