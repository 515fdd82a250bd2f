use std::fmt;

use log::debug;

use super::board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
use super::Player;
use crate::error::{ConfigError, MoveError};

/// Board dimensions and win length, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    /// Number of aligned discs needed to win
    pub min_align: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            min_align: 4,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Validation("game.columns must be > 0".into()));
        }
        if self.columns > 99 {
            return Err(ConfigError::Validation("game.columns must be <= 99".into()));
        }
        if self.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be > 0".into()));
        }
        if self.rows > 99 {
            return Err(ConfigError::Validation("game.rows must be <= 99".into()));
        }
        if self.columns.checked_mul(self.rows).is_none() {
            return Err(ConfigError::Validation(
                "game.columns * game.rows is too large".into(),
            ));
        }
        if self.min_align == 0 {
            return Err(ConfigError::Validation("game.min_align must be > 0".into()));
        }
        if self.min_align > self.columns.max(self.rows) {
            return Err(ConfigError::Validation(
                "game.min_align must fit on the board".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Won(player) => write!(f, "{} wins", player.label()),
            GameOutcome::InProgress | GameOutcome::Draw => f.write_str("NOBODY wins"),
        }
    }
}

/// Where an accepted disc landed and what it did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    /// 0-based row, 0 is the bottom
    pub row: usize,
    /// 0-based column
    pub column: usize,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    turn: Player,
    outcome: GameOutcome,
    remaining_empty: usize,
}

impl GameEngine {
    /// Create an engine for an already validated config
    pub fn new(config: GameConfig) -> Self {
        GameEngine {
            config,
            board: Board::new(config.columns, config.rows),
            turn: Player::A, // A starts
            outcome: GameOutcome::InProgress,
            remaining_empty: config.columns * config.rows,
        }
    }

    /// Validate the config, then create the engine
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Put the engine back in its starting state, keeping the config
    pub fn reset_game(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose disc goes in next
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// True once the game is won or drawn, or no empty cell is left
    pub fn is_finished(&self) -> bool {
        self.outcome != GameOutcome::InProgress || self.remaining_empty == 0
    }

    pub fn remaining_empty(&self) -> usize {
        self.remaining_empty
    }

    /// Cell at a 0-based (row, column), row 0 at the bottom
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.get(row, column)
    }

    /// Fill level of a 1-based column
    pub fn column_level(&self, column: usize) -> Option<usize> {
        column
            .checked_sub(1)
            .and_then(|col| self.board.column_level(col))
    }

    /// 1-based columns that can still take a disc
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }

        (0..self.config.columns)
            .filter(|&col| !self.board.is_column_full(col))
            .map(|col| col + 1)
            .collect()
    }

    /// Drop the current player's disc into a 1-based column.
    ///
    /// All checks happen before anything is written, so a rejected move
    /// leaves the engine untouched.
    pub fn apply_move(&mut self, column: i64) -> Result<MoveOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameAlreadyFinished);
        }

        let col = column
            .checked_sub(1)
            .and_then(|col| usize::try_from(col).ok())
            .filter(|&col| col < self.config.columns)
            .ok_or(MoveError::ColumnOutOfBounds {
                column,
                max: self.config.columns,
            })?;

        let player = self.turn;
        let row = self.board.drop_disc(col, player.to_cell())?;

        // A new alignment can only pass through the disc just played
        if self.board.alignment_through(row, col, self.config.min_align) {
            self.outcome = GameOutcome::Won(player);
        }

        self.turn = player.other();
        self.remaining_empty -= 1;

        if self.remaining_empty == 0 && self.outcome == GameOutcome::InProgress {
            self.outcome = GameOutcome::Draw;
        }

        debug!("{player} played column {column} (row {row}), outcome: {:?}", self.outcome);

        Ok(MoveOutcome {
            player,
            row,
            column: col,
            outcome: self.outcome,
        })
    }

    /// Text rendering of the board
    pub fn render_board(&self) -> String {
        self.board.render()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
