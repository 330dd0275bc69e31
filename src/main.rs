//! CLI entry point for the stops_lite tool.
//!
//! Shrinks a stop dataset to five abbreviated keys, writes it compactly and
//! prints the size before and after.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stops_lite::{
    error::OptimizeError,
    pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT, Paths, optimize},
    report::SizeReport,
};
use tracing::{error, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "stops_lite")]
#[command(about = "Shrink a transit stop dataset to a compact lite format", long_about = None)]
struct Cli {
    /// JSON array of stop records
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the lite dataset
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let _file_guard = init_tracing();

    match run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<OptimizeError>() {
                Some(err) => error!(kind = ?err.kind(), error = %e, "Optimization failed"),
                None => error!(error = %e, "Optimization failed"),
            }
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SizeReport> {
    let paths = Paths {
        input: cli.input.clone(),
        output: cli.output.clone(),
    };

    Ok(optimize(&paths)?)
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// Falls back to stderr only when the log file cannot be opened.
fn init_tracing() -> Option<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/stops_lite.log".to_string());

    let (json_layer, guard, appender_error) = match file_appender(&log_file_path) {
        Ok(appender) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()),
                );
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    if let Some(e) = appender_error {
        warn!(path = %log_file_path, error = %e, "Log file unavailable, logging to stderr only");
    }

    guard
}

fn file_appender(log_file_path: &str) -> Result<RollingFileAppender, InitError> {
    let log_dir = Path::new(log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("stops_lite.log"));

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_name.to_string_lossy())
        .build(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["stops_lite"]);
        assert_eq!(cli.input, Path::new("stops.txt"));
        assert_eq!(cli.output, Path::new("stops_lite.json"));
    }

    #[test]
    fn test_cli_has_no_extra_outputs() {
        assert!(Cli::try_parse_from(["stops_lite", "--history", "runs.csv"]).is_err());
    }

    #[test]
    fn test_file_appender_reports_uncreatable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();
        let log_path = blocker.join("logs").join("stops_lite.log");

        assert!(file_appender(&log_path.to_string_lossy()).is_err());
    }

    #[test]
    fn test_file_appender_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("nested").join("stops_lite.log");

        assert!(file_appender(&log_path.to_string_lossy()).is_ok());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "stops_lite",
            "-i",
            "data/all.json",
            "--output",
            "dist/lite.json",
        ]);
        assert_eq!(cli.input, Path::new("data/all.json"));
        assert_eq!(cli.output, Path::new("dist/lite.json"));
    }
}
