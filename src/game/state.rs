use std::fmt;

use log::{debug, trace};

use super::board::{Board, Cell, HEIGHT, RUN, WIDTH};
use super::player::Player;
use crate::error::EngineError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

/// Result of a single [`Game::drop_piece`] call.
///
/// `Continue`, `Win` and `Tie` mean a piece was placed. `ColumnFull` and
/// `GameAlreadyOver` are rejections that left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Continue,
    Win(Player),
    Tie,
    ColumnFull,
    GameAlreadyOver,
}

impl MoveResult {
    /// True if a piece was placed
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveResult::Continue | MoveResult::Win(_) | MoveResult::Tie)
    }

    /// True if this move ended the game
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveResult::Win(_) | MoveResult::Tie)
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveResult::Continue => f.write_str("move accepted"),
            MoveResult::Win(player) => write!(f, "{player} won!"),
            MoveResult::Tie => f.write_str("tie game"),
            MoveResult::ColumnFull => f.write_str("column is full"),
            MoveResult::GameAlreadyOver => f.write_str("game is already over"),
        }
    }
}

/// A single Connect Four match: the grid, whose turn it is, and whether the
/// game has finished.
///
/// Once a win or tie is recorded every further drop is rejected with
/// [`MoveResult::GameAlreadyOver`] until [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active_player: Player,
    outcome: Option<Outcome>,
}

impl Game {
    /// Create a game with an empty board and player 1 to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            active_player: Player::One,
            outcome: None,
        }
    }

    /// Discard all state and start over with player 1
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Terminal result, once the game has ended
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces_placed(&self) -> usize {
        self.board.occupied()
    }

    /// Cell at (row, column), row 0 being the top
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, EngineError> {
        if row >= HEIGHT {
            return Err(EngineError::RowOutOfRange {
                row,
                height: HEIGHT,
            });
        }
        check_column(column)?;
        Ok(self.board.get(row, column))
    }

    /// Lowest empty row in `column`, or `None` if the column is full
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, EngineError> {
        check_column(column)?;
        Ok(self.board.landing_row(column))
    }

    /// Columns that can take a piece; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..WIDTH)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Does `player` have four in a row anywhere on the board?
    pub fn check_for_win(&self, player: Player) -> bool {
        self.board.has_four(player.to_cell())
    }

    /// Coordinates of the first four-in-a-row owned by `player`
    pub fn winning_line(&self, player: Player) -> Option<[(usize, usize); RUN]> {
        self.board.winning_line(player.to_cell())
    }

    /// Is every cell occupied? Only meaningful as a result when
    /// [`Game::check_for_win`] is false for the player who just moved.
    pub fn check_for_tie(&self) -> bool {
        self.board.is_full()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// An out-of-range column is an `Err` and is checked before anything
    /// else. Rejections leave the game unchanged. A win is checked before a
    /// tie, and the active player only changes when the game continues.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveResult, EngineError> {
        check_column(column)?;

        if self.is_over() {
            debug!("rejected drop into column {column}: game is already over");
            return Ok(MoveResult::GameAlreadyOver);
        }

        let player = self.active_player;
        let Some(row) = self.board.drop_piece(column, player.to_cell()) else {
            debug!("rejected drop into column {column}: column is full");
            return Ok(MoveResult::ColumnFull);
        };
        trace!("{player} dropped into column {column}, landed on row {row}");

        if self.check_for_win(player) {
            debug!("{player} wins");
            self.outcome = Some(Outcome::Winner(player));
            return Ok(MoveResult::Win(player));
        }

        if self.check_for_tie() {
            debug!("board full, game tied");
            self.outcome = Some(Outcome::Tie);
            return Ok(MoveResult::Tie);
        }

        self.active_player = player.other();
        Ok(MoveResult::Continue)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn check_column(column: usize) -> Result<(), EngineError> {
    if column >= WIDTH {
        return Err(EngineError::ColumnOutOfRange {
            column,
            width: WIDTH,
        });
    }
    Ok(())
}
