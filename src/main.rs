//! Blastgrid CLI - Command-line interface for playing and scripting Blastgrid games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Blastgrid - A turn-based bomb game
#[derive(Parser, Debug)]
#[command(name = "blastgrid")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Layout file (default: built-in board)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        #[command(flatten)]
        rules: cli::RuleArgs,
    },

    /// Feed commands from a script (or stdin) and print the outcome
    Run {
        /// Script file, one command per line (default: stdin)
        #[arg(long)]
        script: Option<PathBuf>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Layout file (default: built-in board)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress per-command output
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        rules: cli::RuleArgs,
    },

    /// Validate a layout file
    Validate {
        /// Layout file to validate
        #[arg(required = true)]
        layout: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            seed,
            layout,
            rules,
        } => cli::play::execute(layout, seed, rules),

        Commands::Run {
            script,
            seed,
            layout,
            format,
            quiet,
            rules,
        } => cli::run::execute(script, layout, seed, rules, format, quiet),

        Commands::Validate { layout } => cli::validate::execute(layout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
