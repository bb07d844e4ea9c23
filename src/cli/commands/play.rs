//! Play command - interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use super::parse_player_token;
use crate::board::{Board, Cell};
use crate::game::{GameStatus, Session};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine in the terminal")]
pub struct PlayArgs {
    /// Which mark you play (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Which mark opens the game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_player_token(&args.human, "--human")?;
    let first = parse_player_token(&args.first, "--first")?;

    let mut session = Session::new(human, first);
    println!(
        "You play {} and the computer plays {}. {} opens.",
        session.human(),
        session.engine_side(),
        first
    );

    let stdin = io::stdin();
    run(&mut session, stdin.lock())
}

/// Drive the session from a line-based input source until it is exhausted
/// or the player quits.
fn run<R: BufRead>(session: &mut Session, input: R) -> Result<()> {
    let mut lines = input.lines();

    loop {
        if session.status() == GameStatus::InProgress
            && session.to_move() == session.engine_side()
        {
            let pos = session.play_engine()?;
            println!("Computer plays cell {}.", pos + 1);
        }

        println!("\n{}", render(session.board()));

        match outcome_message(session) {
            Some(message) => println!("{message} Enter 'r' for a rematch or 'q' to quit."),
            None => {
                print!("Your move (1-9, 'r' restarts, 'q' quits): ");
                io::stdout().flush()?;
            }
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let token = line.trim();

        match token {
            "q" | "quit" => break,
            "r" | "restart" => {
                session.restart();
                continue;
            }
            _ => {}
        }

        if session.status().is_terminal() {
            println!("The game is over. Enter 'r' for a rematch or 'q' to quit.");
            continue;
        }

        match parse_cell_token(token) {
            Some(pos) => match session.play_human(pos) {
                Ok(_) => {}
                Err(crate::Error::InvalidMove { .. }) => {
                    println!("Cell {} is taken.", pos + 1);
                }
                Err(err) => return Err(err.into()),
            },
            None => println!("Unrecognized input '{token}'. Enter a cell from 1 to 9."),
        }
    }

    Ok(())
}

/// Map a `1`-`9` token to a board position
fn parse_cell_token(token: &str) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .filter(|d| (1..=9).contains(d))
        .map(|d| d - 1)
}

/// Render the board with cell numbers shown in the empty cells
fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..3 {
            let pos = row * 3 + col;
            let shown = match board.get(pos) {
                Cell::Empty => (b'1' + pos as u8) as char,
                cell => cell.to_char(),
            };
            if col > 0 {
                out.push('|');
            }
            out.push(' ');
            out.push(shown);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn outcome_message(session: &Session) -> Option<String> {
    match session.status() {
        GameStatus::InProgress => None,
        GameStatus::Won(side) if side == session.human() => Some("You win!".to_string()),
        GameStatus::Won(_) => Some("The computer wins.".to_string()),
        GameStatus::Drawn => Some("It's a draw.".to_string()),
    }
}
