//! Entry Zone CLI
//!
//! Checks whether the attacking side commonly enters a zone in the opening
//! seconds of a round, and tallies carried weapon classes.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use entry_core::{AnalysisConfig, EntranceAggregator, EntranceReport, EntryError, Side};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "entry-zone")]
#[command(about = "Entry-zone analysis over recorded round telemetry", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Report whether attacking-side entrance through a zone is common
    Entrance {
        /// Telemetry file (.json or .csv)
        #[arg(long)]
        frames: PathBuf,

        /// Zone vertices: "x1,y1;x2,y2;..." or JSON pairs (default: built-in zone)
        #[arg(long)]
        boundary: Option<String>,

        /// Analysis config JSON (default: $ENTRY_ZONE_CONFIG_PATH or built-in)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the full report as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Tally weapon classes carried across frames
    Weapons {
        /// Telemetry file (.json or .csv)
        #[arg(long)]
        frames: PathBuf,

        /// Restrict to one side (T or CT)
        #[arg(long)]
        side: Option<Side>,
    },
}

/// Exit code for failures caused by the supplied telemetry, boundary or config
#[cfg(feature = "cli")]
const EXIT_INPUT_ERROR: u8 = 2;

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

#[cfg(feature = "cli")]
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<EntryError>() {
        Some(entry_err) if entry_err.is_input_error() => EXIT_INPUT_ERROR,
        _ => 1,
    }
}

#[cfg(feature = "cli")]
fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Entrance {
            frames,
            boundary,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => AnalysisConfig::load(&path)?,
                None => AnalysisConfig::from_env()?,
            };
            let zone = match boundary {
                Some(raw) => entry_cli::parse_boundary(&raw)?,
                None => entry_cli::default_boundary()?,
            };
            let frames = entry_cli::load_frames(&frames)?;

            let report = EntranceAggregator::new(&zone, &config)?.evaluate(&frames)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, zone.shape().as_str());
            }
        }

        Commands::Weapons { frames, side } => {
            let frames = entry_cli::load_frames(&frames)?;
            let tally = entry_core::count_weapon_classes_for(&frames, side);

            if tally.is_empty() {
                println!("No weapons carried");
            }
            for (class, count) in tally.iter() {
                println!("{:<16} {}", class, count);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_report(report: &EntranceReport, shape: &str) {
    println!("{}", report.is_common);
    println!("   Zone shape:        {}", shape);
    println!("   Attacking frames:  {}", report.attacking_frames);
    println!("   In entry window:   {}", report.window_attacking_frames);
    println!("   Entered zone:      {}", report.entered_frames);
    println!(
        "   Ratio:             {:.3} (threshold {:.2})",
        report.ratio, report.threshold
    );
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("entry-zone CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
