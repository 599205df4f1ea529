//! dist-compare CLI

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dist_compare::comparison::compare;
use dist_compare::constants::{FIRST_SAMPLE_LABEL, OUTPUT_FILE_NAME, SECOND_SAMPLE_LABEL};
use dist_compare::plot::create_comparison_histogram;
use dist_compare::report::render_report;
use dist_compare::sample::load_sample;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dist-compare")]
#[command(about = "Compare two samples: summary statistics, normality, t-test, KS test and histogram")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Text file with the first sample, one number per line
    file1: PathBuf,

    /// Text file with the second sample, one number per line
    file2: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            println!("{}", Cli::command().render_usage());
            eprint!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.file1, &cli.file2) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(file1: &Path, file2: &Path) -> Result<()> {
    let first = load_sample(file1)?;
    let second = load_sample(file2)?;

    let comparison = compare(&first, &second)?;
    print!("{}", render_report(&comparison));

    create_comparison_histogram(
        (FIRST_SAMPLE_LABEL, &first),
        (SECOND_SAMPLE_LABEL, &second),
        Path::new(OUTPUT_FILE_NAME),
    )?;
    println!("Histogram saved as {}", OUTPUT_FILE_NAME);

    Ok(())
}
