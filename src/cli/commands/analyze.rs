//! Analyze command - minimax values for a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::board::{Board, Player};
use crate::cli::output;
use crate::engine::Engine;

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every legal move in a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells ('X', 'O', '.'), row-major from the top-left,
    /// e.g. "XO..X...."
    #[arg(long)]
    pub board: String,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AnalysisReport {
    board: String,
    side_to_move: Player,
    moves: Vec<MoveValue>,
    best: Option<usize>,
}

#[derive(Serialize)]
struct MoveValue {
    position: usize,
    row: usize,
    col: usize,
    value: i32,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;
    if board.winner().is_some() || board.is_full() {
        return Err(anyhow::anyhow!("position is already terminal"));
    }

    let side = board.side_to_move()?;
    let engine = Engine::new(side);

    let values = engine.evaluate_moves(&mut board);
    let best = engine.select_move(&mut board);

    if args.json {
        let report = AnalysisReport {
            board: board.encode(),
            side_to_move: side,
            moves: values
                .iter()
                .map(|&(position, value)| MoveValue {
                    position,
                    row: position / 3,
                    col: position % 3,
                    value,
                })
                .collect(),
            best,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_section("Position analysis");
    println!("{board}");
    println!("\nSide to move: {side}");
    println!("\nMove values for {side}:");
    for &(position, value) in &values {
        println!(
            "  position {} (row {}, col {}): {}",
            position,
            position / 3,
            position % 3,
            describe(value)
        );
    }

    if let Some(best) = best {
        println!("\nEngine move: position {} (row {}, col {})", best, best / 3, best % 3);
    }

    Ok(())
}

fn describe(value: i32) -> &'static str {
    match value {
        1 => "+1 (win)",
        -1 => "-1 (loss)",
        _ => "0 (draw)",
    }
}
