//! Tic-tac-toe with a computer player that searches the full game tree
//!
//! This crate provides:
//! - Complete 3x3 board representation with validation
//! - A minimax engine that plays perfectly and never loses
//! - A whole-game session state machine for human-versus-engine play
//! - Scripted opponents and a headless series runner for exercising the
//!   engine over many games

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod harness;
pub mod lines;
pub mod opponents;

pub use board::{Board, Cell, Player};
pub use engine::Engine;
pub use error::{Error, Result};
pub use game::{GameStatus, Move, Session};
pub use harness::{GameSeries, SeriesConfig, SeriesResult};
pub use lines::WINNING_LINES;
pub use opponents::{DefensiveOpponent, Opponent, PerfectOpponent, RandomOpponent};
