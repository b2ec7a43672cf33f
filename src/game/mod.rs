//! Core Connect Four game logic: board representation, player types, and the
//! turn-based game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DIRECTIONS, HEIGHT, RUN, WIDTH};
pub use player::Player;
pub use state::{Game, MoveResult, Outcome};
