//! oxo CLI - play, analyze, and evaluate the tic-tac-toe engine
//!
//! This CLI provides a unified interface for:
//! - Playing against the engine in the terminal
//! - Inspecting the minimax value of every move in a position
//! - Running evaluation series against scripted opponents

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe against a full-tree search engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(oxo::cli::commands::play::PlayArgs),

    /// Show the minimax value of every legal move in a position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Play a series of games against a scripted opponent
    Evaluate(oxo::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Evaluate(args) => oxo::cli::commands::evaluate::execute(args),
    }
}
