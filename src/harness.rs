//! Headless series runner for exercising the engine over many games

use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::game::{GameStatus, Session};
use crate::opponents::Opponent;

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games to play
    pub games: usize,

    /// Which mark the engine plays
    pub engine_side: Player,

    /// Which mark opens each game
    pub first: Player,

    /// Seed for the opponent's randomness
    pub seed: Option<u64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 200,
            engine_side: Player::O,
            first: Player::X,
            seed: None,
        }
    }
}

/// Tally of a finished series, from the engine's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Name of the opponent that filled the human seat
    pub opponent: String,

    /// Total games played
    pub total_games: usize,

    /// Games the engine won
    pub wins: usize,

    /// Drawn games
    pub draws: usize,

    /// Games the engine lost
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl SeriesResult {
    /// Create a new series result
    pub fn new(opponent: &str, total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            opponent: opponent.to_string(),
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save the result to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), crate::Error> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a result from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, crate::Error> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a configured number of games between the engine and an opponent
pub struct GameSeries {
    config: SeriesConfig,
}

impl GameSeries {
    /// Create a new series from a configuration
    pub fn new(config: SeriesConfig) -> Self {
        Self { config }
    }

    /// The configuration this series runs with
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Run the series, discarding per-game progress
    pub fn run(&self, opponent: &mut dyn Opponent) -> Result<SeriesResult, crate::Error> {
        self.run_with(opponent, |_, _| {})
    }

    /// Run the series, calling `after_game` with the game number and outcome
    /// after every finished game
    pub fn run_with<F>(
        &self,
        opponent: &mut dyn Opponent,
        mut after_game: F,
    ) -> Result<SeriesResult, crate::Error>
    where
        F: FnMut(usize, GameStatus),
    {
        if let Some(seed) = self.config.seed {
            opponent.set_seed(seed);
        }

        let mut session = Session::new(self.config.engine_side.opponent(), self.config.first);
        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for game_num in 0..self.config.games {
            session.restart();
            let outcome = Self::play_game(&mut session, opponent)?;

            // Count from the engine's perspective
            match outcome {
                GameStatus::Won(winner) if winner == self.config.engine_side => wins += 1,
                GameStatus::Won(_) => losses += 1,
                GameStatus::Drawn => draws += 1,
                GameStatus::InProgress => unreachable!("play_game returns terminal statuses only"),
            }

            after_game(game_num, outcome);
        }

        Ok(SeriesResult::new(
            opponent.name(),
            self.config.games,
            wins,
            draws,
            losses,
        ))
    }

    fn play_game(
        session: &mut Session,
        opponent: &mut dyn Opponent,
    ) -> Result<GameStatus, crate::Error> {
        while session.status() == GameStatus::InProgress {
            if session.to_move() == session.engine_side() {
                session.play_engine()?;
            } else {
                let pos = opponent.select_move(session.board(), session.human())?;
                session.play_human(pos)?;
            }
        }

        Ok(session.status())
    }
}
