//! Exhaustive minimax search for the computer player

use crate::board::{Board, Cell, Player};

/// The computer player. Selects moves by searching the full game tree.
///
/// Positions are scored from the engine's perspective: +1 when the engine's
/// mark has completed a line, -1 when the opposing mark has, 0 for a full
/// board with no winner. The 3x3 tree is small enough that every call
/// searches it exhaustively, so the engine plays perfectly and two engines
/// facing each other always draw.
///
/// The search works on one shared board: it places a hypothetical mark,
/// recurses, then clears the cell again. Callers hand over `&mut Board` and
/// get it back in exactly the state they passed it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    player: Player,
}

impl Engine {
    /// Create an engine that plays the given side
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    /// The side this engine plays
    pub fn player(&self) -> Player {
        self.player
    }

    /// Compute the minimax value of the position, with `maximizing`
    /// indicating whether the engine is the side to move.
    ///
    /// Terminal tests run in a fixed order: engine win (+1), then opponent
    /// win (-1), then full board (0). A legal board satisfies at most one of
    /// the win tests, and a win on a full board must be scored as the win,
    /// so the draw test comes last.
    pub fn evaluate(&self, board: &mut Board, maximizing: bool) -> i32 {
        if board.has_won(self.player) {
            return 1;
        }
        if board.has_won(self.player.opponent()) {
            return -1;
        }
        if board.is_full() {
            return 0;
        }

        let mark = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in 0..9 {
            if board.is_empty(pos) {
                board.cells[pos] = mark.to_cell();
                let value = self.evaluate(board, !maximizing);
                board.cells[pos] = Cell::Empty;

                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
        }

        best
    }

    /// Evaluate every empty cell as an engine move and return its minimax
    /// value, in ascending cell order.
    pub fn evaluate_moves(&self, board: &mut Board) -> Vec<(usize, i32)> {
        let mut moves_with_values = Vec::new();
        for pos in 0..9 {
            if board.is_empty(pos) {
                board.cells[pos] = self.player.to_cell();
                let value = self.evaluate(board, false);
                board.cells[pos] = Cell::Empty;
                moves_with_values.push((pos, value));
            }
        }
        moves_with_values
    }

    /// Choose the engine's move: the empty cell whose resulting position
    /// scores highest.
    ///
    /// Candidates are compared with a strict greater-than against the
    /// running best, so among equally-valued moves the lowest cell index
    /// wins. Returns `None` only when the board has no empty cell.
    pub fn select_move(&self, board: &mut Board) -> Option<usize> {
        let mut best_value = i32::MIN;
        let mut best_move = None;

        for (pos, value) in self.evaluate_moves(board) {
            if value > best_value {
                best_value = value;
                best_move = Some(pos);
            }
        }

        best_move
    }
}
