//! Evaluate command - run the engine against scripted opponents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::parse_player_token;
use crate::board::Player;
use crate::cli::output;
use crate::game::GameStatus;
use crate::harness::{GameSeries, SeriesConfig};
use crate::opponents::{DefensiveOpponent, Opponent, PerfectOpponent, RandomOpponent};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games against a scripted opponent")]
pub struct EvaluateArgs {
    /// Opponent filling the human seat
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 200)]
    pub games: usize,

    /// Which mark the engine plays (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub engine: String,

    /// Which mark opens each game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,

    /// Seed for the opponent's randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let engine_side = parse_player_token(&args.engine, "--engine")?;
    let first = parse_player_token(&args.first, "--first")?;

    let mut opponent = make_opponent(&args.opponent, engine_side.opponent())?;

    let config = SeriesConfig {
        games: args.games,
        engine_side,
        first,
        seed: args.seed,
    };
    let series = GameSeries::new(config);

    if args.json {
        let result = series.run(opponent.as_mut())?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        if let Some(path) = &args.export {
            result.save(path)?;
        }
        return Ok(());
    }

    output::print_section("Evaluation");
    output::print_kv("Opponent", opponent.name());
    output::print_kv("Engine plays", &engine_side.to_string());
    output::print_kv("First move", &first.to_string());
    output::print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        output::print_kv("Seed", &seed.to_string());
    }

    println!();
    let pb = output::create_series_progress(args.games as u64);
    let mut wins = 0usize;
    let mut draws = 0usize;
    let mut losses = 0usize;

    let result = series.run_with(opponent.as_mut(), |game_num, outcome| {
        match outcome {
            GameStatus::Won(side) if side == engine_side => wins += 1,
            GameStatus::Won(_) => losses += 1,
            _ => draws += 1,
        }
        pb.set_position(game_num as u64 + 1);
        pb.set_message(format!("W:{wins} D:{draws} L:{losses}"));
    })?;
    pb.finish_with_message(format!(
        "W:{} D:{} L:{}",
        result.wins, result.draws, result.losses
    ));

    output::print_section("Results");
    output::print_kv("Total games", &result.total_games.to_string());
    output::print_kv(
        "Engine wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    output::print_kv(
        "Engine losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}

fn make_opponent(token: &str, side: Player) -> Result<Box<dyn Opponent>> {
    match token.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomOpponent::new())),
        "defensive" => Ok(Box::new(DefensiveOpponent::new())),
        "perfect" => Ok(Box::new(PerfectOpponent::new(side))),
        other => Err(anyhow::anyhow!(
            "Unknown opponent type: '{other}'. Supported: random, defensive, perfect"
        )),
    }
}
