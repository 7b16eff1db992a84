//! Flappy - a Flappy Bird style game for the terminal.
//!
//! The library holds all game logic so it can be driven and tested without
//! a terminal; the binary adds the CLI, terminal setup and the run loop.

pub mod build_info;
pub mod core;
pub mod entities;
pub mod input;
pub mod states;
pub mod ui;
pub mod utils;

pub use crate::core::{Game, GameConfig, GameError, GameResult, Session};
pub use crate::utils::persistence::HighScoreStore;
