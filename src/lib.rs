//! # Connect Four
//!
//! Rules engine and turn-based state machine for Connect Four. The engine
//! knows nothing about how moves are chosen or how results are shown; a host
//! feeds it columns and reacts to the [`game::MoveResult`] it returns.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state machine
//! - [`replay`]: Feeds a column sequence through a game and records a transcript
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod replay;
