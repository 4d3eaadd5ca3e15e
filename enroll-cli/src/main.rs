//! Enroll: in-memory course registration CLI.
//!
//! # Usage
//!
//! ```text
//! enroll [--seed <file>] [-v] courses [--json]
//! enroll [--seed <file>] [-v] students [--json]
//! enroll [--seed <file>] [-v] roster <course>
//! enroll [--seed <file>] [-v] register <student> <course>
//! enroll [--seed <file>] [-v] drop <student> <course>
//! enroll [--seed <file>] [-v] shell
//! ```
//!
//! With no subcommand the interactive shell starts.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{courses::CoursesArgs, enroll::EnrollArgs, roster::RosterArgs, students::StudentsArgs};
use enroll_core::{seed, Registry, Seed};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "enroll",
    version,
    about = "Register students for capacity-limited courses",
    long_about = None,
)]
struct Cli {
    /// Seed catalog (YAML). Defaults to ~/.enroll/seed.yaml, then the built-in catalog.
    #[arg(long, global = true, env = "ENROLL_SEED", value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Log registry activity to stderr at debug level.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List courses with their available seats.
    Courses(CoursesArgs),

    /// List students and the courses they are registered in.
    Students(StudentsArgs),

    /// Show the students registered in a course.
    Roster(RosterArgs),

    /// Register a student for a course.
    Register(EnrollArgs),

    /// Remove a student from a course.
    Drop(EnrollArgs),

    /// Start the interactive menu (default).
    Shell,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let seed = load_seed(cli.seed.as_deref())?;
    let mut registry = Registry::from_seed(&seed).context("seed catalog is inconsistent")?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Courses(args) => args.run(&registry),
        Commands::Students(args) => args.run(&registry),
        Commands::Roster(args) => args.run(&registry),
        Commands::Register(args) => args.register(&mut registry),
        Commands::Drop(args) => args.drop_course(&mut registry),
        Commands::Shell => {
            commands::shell::run_stdio(&mut registry).context("shell I/O failed")
        }
    }
}

fn load_seed(explicit: Option<&Path>) -> Result<Seed> {
    match explicit {
        Some(path) => seed::load(path)
            .with_context(|| format!("failed to load seed '{}'", path.display())),
        None => seed::resolve().context("failed to resolve default seed"),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
