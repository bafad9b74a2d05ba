//! mammo-sort CLI - sorts mammogram datasets by answer key

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Sorts mammogram image variants into Normal/Abnormal folders.
#[derive(Parser)]
#[command(name = "mammo-sort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort every variant directory's images by the answer key
    Sort {
        /// Answer-key file
        #[arg(short, long, default_value = "Answers")]
        answers: PathBuf,

        /// Variant directory (repeatable; defaults to the standard dataset layout)
        #[arg(short, long = "dir")]
        dirs: Vec<PathBuf>,

        /// Image file extension (without the dot)
        #[arg(long, default_value = "pgm")]
        extension: String,

        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Show what would move without touching any files
        #[arg(long)]
        dry_run: bool,
    },

    /// Create Normal/Abnormal subfolders without moving anything
    Init {
        /// Variant directory (repeatable; defaults to the standard dataset layout)
        #[arg(short, long = "dir")]
        dirs: Vec<PathBuf>,
    },

    /// Parse the answer key and show record counts
    Check {
        /// Answer-key file
        #[arg(short, long, default_value = "Answers")]
        answers: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { answers, dirs, extension, report, dry_run } => {
            commands::sort::run(answers, dirs, extension, report, dry_run, cli.verbose)
        }
        Commands::Init { dirs } => commands::init::run(dirs, cli.verbose),
        Commands::Check { answers } => commands::check::run(answers, cli.verbose),
    }
}
