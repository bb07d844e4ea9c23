//! Test suite for the search engine
//! Validates terminal scoring, optimal play, tie-breaking, and the
//! mutate-and-undo discipline on the shared board

use oxo::opponents::{Opponent, PerfectOpponent};
use oxo::{Board, Cell, Engine, GameStatus, Player, Session, WINNING_LINES};

/// Play one full game with the session's engine on one seat and an
/// independent perfect player on the other. Returns the final status.
fn play_perfect_game(human: Player, first: Player) -> GameStatus {
    let mut session = Session::new(human, first);
    let mut rival = PerfectOpponent::new(human);

    while session.status() == GameStatus::InProgress {
        if session.to_move() == session.engine_side() {
            session.play_engine().unwrap();
        } else {
            let pos = rival.select_move(session.board(), human).unwrap();
            session.play_human(pos).unwrap();
        }
    }

    session.status()
}

/// Every board reachable within the first two plies of an X-first game.
fn shallow_positions() -> Vec<Board> {
    let mut boards = vec![Board::new()];

    for x_pos in 0..9 {
        let mut after_x = Board::new();
        after_x.place(x_pos, Player::X).unwrap();

        for o_pos in after_x.empty_positions() {
            let mut after_o = after_x;
            after_o.place(o_pos, Player::O).unwrap();
            boards.push(after_o);
        }
        boards.push(after_x);
    }

    boards
}

mod terminal_scoring {
    use super::*;

    #[test]
    fn test_every_winning_line_scores_for_its_owner() {
        for player in [Player::X, Player::O] {
            for line in &WINNING_LINES {
                let mut board = Board::new();
                for &idx in line {
                    board.cells[idx] = player.to_cell();
                }

                let own = Engine::new(player);
                let other = Engine::new(player.opponent());
                assert_eq!(own.evaluate(&mut board, true), 1, "line {line:?}");
                assert_eq!(own.evaluate(&mut board, false), 1, "line {line:?}");
                assert_eq!(other.evaluate(&mut board, true), -1, "line {line:?}");
            }
        }
    }

    #[test]
    fn test_win_on_a_full_board_scores_as_a_win() {
        // X's final placement fills the board and completes a line
        let mut board = Board::from_string("XXXOOXOXO").unwrap();
        assert!(board.is_full());

        assert_eq!(Engine::new(Player::X).evaluate(&mut board, false), 1);
        assert_eq!(Engine::new(Player::O).evaluate(&mut board, true), -1);
    }

    #[test]
    fn test_full_board_without_winner_is_zero() {
        let mut board = Board::from_string("XOXXOOOXX").unwrap();

        for side in [Player::X, Player::O] {
            for maximizing in [true, false] {
                assert_eq!(Engine::new(side).evaluate(&mut board, maximizing), 0);
            }
        }
    }
}

mod search_values {
    use super::*;

    #[test]
    fn test_values_stay_in_unit_range_over_shallow_tree() {
        for board in shallow_positions() {
            let side = board.side_to_move().unwrap();

            for engine_side in [Player::X, Player::O] {
                let engine = Engine::new(engine_side);
                let mut scratch = board;
                let value = engine.evaluate(&mut scratch, engine_side == side);
                assert!(
                    (-1..=1).contains(&value),
                    "value {value} out of range for '{}'",
                    board.encode()
                );
            }
        }
    }

    #[test]
    fn test_empty_board_is_a_draw_for_either_side() {
        let mut board = Board::new();

        assert_eq!(Engine::new(Player::X).evaluate(&mut board, true), 0);
        assert_eq!(Engine::new(Player::O).evaluate(&mut board, false), 0);
    }

    #[test]
    fn test_evaluate_moves_covers_every_empty_cell() {
        let mut board = Board::from_string("X...O....").unwrap();
        let engine = Engine::new(Player::X);

        let values = engine.evaluate_moves(&mut board);
        let positions: Vec<usize> = values.iter().map(|&(pos, _)| pos).collect();
        assert_eq!(positions, board.empty_positions());
    }
}

mod move_selection {
    use super::*;

    #[test]
    fn test_immediate_win_is_taken() {
        // Each board has exactly one best move, a placement that completes
        // a line for the side to move
        for s in ["X.XOO..X.", "XX.OO....", "O.X.OX..."] {
            let mut board = Board::from_string(s).unwrap();
            let side = board.side_to_move().unwrap();
            let engine = Engine::new(side);

            let pos = engine
                .select_move(&mut board)
                .expect("open board must yield a move");
            board.place(pos, side).unwrap();
            assert!(board.has_won(side), "expected a winning placement in '{s}'");
        }
    }

    #[test]
    fn test_single_threat_is_blocked() {
        // The side to move cannot win this turn and the opponent threatens
        // exactly one cell
        for (s, block) in [("XX..O....", 2), ("X..XO....", 6)] {
            let mut board = Board::from_string(s).unwrap();
            let side = board.side_to_move().unwrap();
            let engine = Engine::new(side);

            assert_eq!(engine.select_move(&mut board), Some(block), "board '{s}'");
        }
    }

    #[test]
    fn test_ties_resolve_to_the_lowest_index() {
        // Two immediate wins at cells 2 and 6; the lower index is chosen
        let mut board = Board::from_string("XX.XOO.O.").unwrap();
        assert_eq!(Engine::new(Player::X).select_move(&mut board), Some(2));

        // All nine openings are equal, so the first cell is chosen
        let mut empty = Board::new();
        assert_eq!(Engine::new(Player::X).select_move(&mut empty), Some(0));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let engine = Engine::new(Player::O);

        let first = {
            let mut board = Board::from_string("X...X..O.").unwrap();
            engine.select_move(&mut board)
        };
        for _ in 0..10 {
            let mut board = Board::from_string("X...X..O.").unwrap();
            assert_eq!(engine.select_move(&mut board), first);
        }
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(Engine::new(Player::X).select_move(&mut board), None);
        assert_eq!(Engine::new(Player::O).select_move(&mut board), None);
    }
}

mod forced_outcomes {
    use super::*;

    #[test]
    fn test_two_perfect_players_always_draw() {
        for (human, first) in [
            (Player::X, Player::X),
            (Player::X, Player::O),
            (Player::O, Player::X),
            (Player::O, Player::O),
        ] {
            assert_eq!(
                play_perfect_game(human, first),
                GameStatus::Drawn,
                "human={human:?} first={first:?}"
            );
        }
    }

    #[test]
    fn test_engine_converts_a_won_position() {
        // O answered a corner opening with an edge, which loses by force.
        // X must find the win no matter how O continues.
        let mut session = Session::new(Player::O, Player::X);
        session.play_engine().unwrap();
        session.play_human(1).unwrap();

        while session.status() == GameStatus::InProgress {
            if session.to_move() == session.engine_side() {
                session.play_engine().unwrap();
            } else {
                let pos = session.board().empty_positions()[0];
                session.play_human(pos).unwrap();
            }
        }

        assert_eq!(session.status(), GameStatus::Won(Player::X));
    }
}

mod restore_discipline {
    use super::*;

    #[test]
    fn test_board_is_byte_for_byte_identical_after_search() {
        for board in shallow_positions() {
            let side = board.side_to_move().unwrap();
            let engine = Engine::new(side);

            let mut working = board;
            let snapshot = working.encode();

            engine.evaluate(&mut working, true);
            assert_eq!(working.encode(), snapshot);
            assert_eq!(working.cells, board.cells);

            engine.evaluate_moves(&mut working);
            assert_eq!(working.cells, board.cells);

            engine.select_move(&mut working);
            assert_eq!(working.encode(), snapshot);
            assert_eq!(working.cells, board.cells);
        }
    }

    #[test]
    fn test_search_does_not_disturb_midgame_marks() {
        let mut board = Board::from_string("XO.OX....").unwrap();
        let before = board.cells;

        Engine::new(Player::X).select_move(&mut board);

        assert_eq!(board.cells, before);
        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.get(3), Cell::O);
    }
}
