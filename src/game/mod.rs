//! Core Connect Four game logic: board representation, player types, and the
//! engine state machine.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use engine::{GameConfig, GameEngine, GameOutcome, MoveOutcome};
pub use player::Player;
