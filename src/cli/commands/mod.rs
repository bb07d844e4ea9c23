//! CLI commands

use anyhow::{Result, anyhow};

use crate::board::Player;

pub mod analyze;
pub mod evaluate;
pub mod play;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    value
        .parse::<Player>()
        .map_err(|_| anyhow!("Invalid value '{value}' for {flag} (expected 'x' or 'o')"))
}
