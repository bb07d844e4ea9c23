//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Find all positions that would immediately win for the player,
/// in ascending order
pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
    let mut moves = Vec::new();
    for line in &WINNING_LINES {
        if let Some(pos) = winning_move_in_line(cells, player, line) {
            moves.push(pos);
        }
    }
    // A single cell can complete two lines at once
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Find the winning move position in a specific line, if one exists
fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty_pos = None;

    for &idx in line {
        match cells[idx] {
            Cell::Empty => {
                if empty_pos.is_some() {
                    // More than one empty cell, not a winning move
                    return None;
                }
                empty_pos = Some(idx);
            }
            c if c == target => count += 1,
            _ => return None, // Opponent piece in line
        }
    }

    if count == 2 { empty_pos } else { None }
}
