//! Scripted opponents for exercising the engine
//!
//! These fill the human seat when the engine is run over many games: a
//! uniform random player, a block-only defensive player, and a second
//! perfect player.

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::board::{Board, Player};
use crate::engine::Engine;
use crate::lines;

/// A scripted player that can drive the human seat of a session
pub trait Opponent {
    /// Select a move for `side` on the given board.
    ///
    /// # Errors
    ///
    /// Returns error if no valid moves are available.
    fn select_move(&mut self, board: &Board, side: Player) -> Result<usize, crate::Error>;

    /// Name used in reports
    fn name(&self) -> &str;

    /// Reseed the opponent's randomness, if it has any
    fn set_seed(&mut self, _seed: u64) {}
}

/// Plays uniformly at random among the empty cells
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn select_move(&mut self, board: &Board, _side: Player) -> Result<usize, crate::Error> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Blocks the engine's immediate winning moves, otherwise plays randomly.
///
/// Note: this opponent does NOT try to win itself, only to block.
pub struct DefensiveOpponent {
    rng: StdRng,
}

impl DefensiveOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DefensiveOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for DefensiveOpponent {
    fn select_move(&mut self, board: &Board, side: Player) -> Result<usize, crate::Error> {
        // Block the lowest-indexed threat first
        let threats = lines::winning_moves(&board.cells, side.opponent());
        if let Some(&pos) = threats.first() {
            return Ok(pos);
        }

        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "Defensive"
    }

    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// A second perfect player, backed by its own search engine.
///
/// The engine searches in place, so this opponent copies the board into a
/// scratch copy before searching rather than mutating the session's board.
pub struct PerfectOpponent {
    engine: Engine,
}

impl PerfectOpponent {
    pub fn new(side: Player) -> Self {
        Self {
            engine: Engine::new(side),
        }
    }
}

impl Opponent for PerfectOpponent {
    fn select_move(&mut self, board: &Board, side: Player) -> Result<usize, crate::Error> {
        debug_assert_eq!(side, self.engine.player());

        let mut scratch = *board;
        self.engine
            .select_move(&mut scratch)
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "Perfect"
    }
}
