use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }

    /// Player label used in prompts and results
    pub fn label(self) -> &'static str {
        match self {
            Player::A => "PLAYER A",
            Player::B => "PLAYER B",
        }
    }

    /// Disc colour name
    pub fn colour(self) -> &'static str {
        match self {
            Player::A => "RED",
            Player::B => "YELLOW",
        }
    }

    /// Board glyph for this player's discs
    pub fn glyph(self) -> char {
        match self {
            Player::A => 'R',
            Player::B => 'Y',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
