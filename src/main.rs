mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod rng;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};

use crate::input::{InputError, load_roster};
use crate::model::profile::{DEFAULT_NOISE_FACTOR, PairingProfile};
use crate::pipeline::stage8_report::{ReportMode, Stage8Input, write_reports};
use crate::pipeline::{EngineError, run_engine};
use crate::report::ReportError;
use crate::rng::SeededSource;

#[derive(Debug, Parser)]
#[command(
    name = "peerpair",
    version,
    about = "Pair quiz participants strongest-with-weakest for peer teaching."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Form groups from a roster and write reports.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Roster file (.json, .tsv, .txt or .csv, optionally .gz).
    #[arg(long)]
    input: PathBuf,
    /// Output directory.
    #[arg(long)]
    out: PathBuf,
    /// Score gap, in standard deviations, above which a pair is teacher-led.
    #[arg(long)]
    alpha: f64,
    /// Noise scale as a fraction of the score standard deviation.
    #[arg(long, default_value_t = DEFAULT_NOISE_FACTOR)]
    noise_factor: f64,
    /// Rank by raw score only.
    #[arg(long, conflicts_with = "noise_factor")]
    no_noise: bool,
    /// Seed for a reproducible run. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = ReportMode::Full)]
    report_mode: ReportMode,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_path: PathBuf,
    out_dir: PathBuf,
    profile: PairingProfile,
    seed: Option<u64>,
    report_mode: ReportMode,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        let noise_factor = if args.no_noise {
            0.0
        } else {
            args.noise_factor
        };
        Self {
            input_path: args.input,
            out_dir: args.out,
            profile: PairingProfile::new(args.alpha).with_noise_factor(noise_factor),
            seed: args.seed,
            report_mode: args.report_mode,
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    if let Err(err) = run(&RunConfig::from(args)) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    let records = load_roster(&config.input_path)?;

    let mut source = match config.seed {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::from_entropy(),
    };
    if config.seed.is_none() {
        info!("no --seed given; using seed {}", source.seed());
    }
    if config.profile.noise_factor == 0.0 {
        warn!("noise disabled; groups follow raw score order exactly");
    }

    let output = run_engine(&records, &config.profile, &mut source)?;

    let input = Stage8Input {
        output: &output,
        seed: Some(source.seed()),
        tool_name: "peerpair".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let out_dir = resolve_output_dir(&config.out_dir);
    write_reports(&input, &out_dir, config.report_mode)?;
    Ok(())
}

fn resolve_output_dir(base: &Path) -> PathBuf {
    if base.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        base.to_path_buf()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
