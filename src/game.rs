//! Whole-game state machine for human-versus-engine play

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::engine::Engine;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    /// Whether the game has ended
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A game between a human seat and the engine.
///
/// The session owns the board, tracks whose turn it is, and derives the
/// status after every move. The human seat is driven from outside through
/// [`play_human`](Self::play_human); the engine seat moves itself through
/// [`play_engine`](Self::play_engine). Both entry points reject moves once
/// the status is terminal, so a finished game only changes through
/// [`restart`](Self::restart).
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    engine: Engine,
    human: Player,
    first: Player,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Session {
    /// Create a session with the given human side and opening side
    pub fn new(human: Player, first: Player) -> Self {
        Session {
            board: Board::new(),
            engine: Engine::new(human.opponent()),
            human,
            first,
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The side to move next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The side the human plays
    pub fn human(&self) -> Player {
        self.human
    }

    /// The side the engine plays
    pub fn engine_side(&self) -> Player {
        self.engine.player()
    }

    /// The moves played so far this game
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play the human's mark at a position.
    ///
    /// # Errors
    ///
    /// Returns error if the game is over, it is the engine's turn, or the
    /// position is out of bounds or occupied.
    pub fn play_human(&mut self, pos: usize) -> Result<GameStatus, crate::Error> {
        self.guard_turn(self.human)?;
        self.apply(pos, self.human)
    }

    /// Let the engine choose and play its move, returning the cell it took.
    ///
    /// # Errors
    ///
    /// Returns error if the game is over or it is the human's turn.
    pub fn play_engine(&mut self) -> Result<usize, crate::Error> {
        let side = self.engine.player();
        self.guard_turn(side)?;

        let pos = self
            .engine
            .select_move(&mut self.board)
            .ok_or(crate::Error::NoValidMoves)?;
        self.apply(pos, side)?;
        Ok(pos)
    }

    /// Throw the position away and start over: empty board, opening side to
    /// move, status back to in-progress.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = self.first;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    fn guard_turn(&self, player: Player) -> Result<(), crate::Error> {
        if self.status.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != player {
            return Err(crate::Error::OutOfTurn { player });
        }
        Ok(())
    }

    fn apply(&mut self, pos: usize, player: Player) -> Result<GameStatus, crate::Error> {
        self.board.place(pos, player)?;
        self.history.push(Move { position: pos, player });
        self.to_move = player.opponent();

        self.status = if let Some(winner) = self.board.winner() {
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        };

        Ok(self.status)
    }
}

impl Default for Session {
    /// Standard setup: human plays X and X opens
    fn default() -> Self {
        Self::new(Player::X, Player::X)
    }
}
