//! # Connect Four
//!
//! A two-player Connect Four engine with configurable board size and win
//! length, played through a text prompt or a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`console`] — Line-oriented text prompt driver
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
