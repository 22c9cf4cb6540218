//! Vertex smearing CLI.
//!
//! Provides three modes of operation:
//! - `run`: Smear N synthetic events from a TOML job file and print statistics
//! - `models`: List the registered vertex models
//! - `info`: Print workspace crate versions

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vtxsmear_core::prelude::*;
use vtxsmear_core::units::to_cm;
use vtxsmear_driver::prelude::*;
use vtxsmear_models::prelude::*;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "VTXSMEAR_LOG";

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Event-vertex smearing.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smear synthetic single-vertex events and print statistics.
    Run {
        /// TOML job file.
        #[arg(short, long)]
        config: PathBuf,

        /// Number of events (overrides `job.events`).
        #[arg(short = 'n', long)]
        events: Option<u32>,

        /// Random seed (overrides `job.seed`).
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print statistics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List registered vertex models.
    Models,

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_job(
    path: &Path,
    events: Option<u32>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), SmearError> {
    let mut config = Config::from_file(path)?;
    if let Some(n) = events {
        config.job.events = n;
    }
    if let Some(s) = seed {
        config.job.seed = s;
    }
    config.validate()?;

    let registry = ModelRegistry::with_defaults();
    let seeds = SeedHierarchy::new(config.job.seed);
    let mut driver = VertexApplicationDriver::from_seeds(&config.smearing, &registry, &seeds)?;
    info!(
        config = %path.display(),
        seed = seeds.root(),
        events = config.job.events,
        "job started"
    );

    for n in 0..u64::from(config.job.events) {
        let mut record = GenEvent::new(n);
        record.add_vertex(FourVector::default());
        let mut event = Event::new(n);
        event.put(config.smearing.source_label.as_str(), record);

        if let Err(e) = driver.produce(&mut event) {
            error!(event = n, error = %e, "event rejected");
        }
    }

    let stats = driver.stats();
    if json {
        let report = serde_json::json!({
            "model": driver.model().kind(),
            "seed": config.job.seed,
            "stats": stats,
            "mean_displacement_mm": stats.mean_displacement(),
            "spread_mm": stats.displacement_spread(),
        });
        println!("{report:#}");
    } else {
        print!("{}", stats_report(driver.model(), stats));
    }
    Ok(())
}

/// Displacements are reported in centimetres, the unit of the job file.
fn stats_report(model: &VertexModel, stats: &SmearingStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "model: {model}");
    let _ = writeln!(
        out,
        "events: processed={}, failed={}, vertices={}",
        stats.events_processed, stats.events_failed, stats.vertices_shifted
    );
    if let (Some(mean), Some(spread)) = (stats.mean_displacement(), stats.displacement_spread()) {
        let _ = writeln!(out, "mean displacement (cm):   {}", in_cm(mean));
        let _ = writeln!(out, "displacement spread (cm): {}", in_cm(spread));
    }
    out
}

fn in_cm(v: DisplacementVector) -> DisplacementVector {
    DisplacementVector::new(to_cm(v.x), to_cm(v.y), to_cm(v.z))
}

fn run_models() {
    for name in ModelRegistry::with_defaults().names() {
        println!("{name}");
    }
}

/// Library crates linked into this binary, with their own package versions.
const CRATE_VERSIONS: [(&str, &str); 3] = [
    ("vtxsmear-core", vtxsmear_core::VERSION),
    ("vtxsmear-models", vtxsmear_models::VERSION),
    ("vtxsmear-driver", vtxsmear_driver::VERSION),
];

fn run_info() {
    println!("vtxsmear v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    for (name, version) in CRATE_VERSIONS {
        println!("  {name:<16} {version}");
    }
    println!();
    println!("smearing label: {SMEARED_LABEL}");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            events,
            seed,
            json,
        } => {
            if let Err(e) = run_job(&config, events, seed, json) {
                error!(error = %e, "job failed");
                return ExitCode::FAILURE;
            }
        }
        Commands::Models => run_models(),
        Commands::Info => run_info(),
    }
    ExitCode::SUCCESS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
