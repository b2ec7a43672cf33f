pub const HEIGHT: usize = 6;
pub const WIDTH: usize = 7;

/// Length of a winning run.
pub const RUN: usize = 4;

/// Scan directions as (delta_row, delta_col): horizontal, vertical,
/// diagonal down-right, diagonal down-left. Row deltas point down the board.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `HEIGHT - 1` is the bottom.
    ///
    /// Panics if the position is outside the grid; callers that take
    /// untrusted coordinates go through [`Game::cell`](super::Game::cell).
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Lowest empty row in `col`, or `None` if the column is full.
    /// Columns outside the grid have no landing row.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= WIDTH {
            return None;
        }
        (0..HEIGHT).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed or `None`
    /// if the column cannot take another piece.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row][col] = cell;
        Some(row)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if `cell` owns a four-in-a-row anywhere on the board
    pub fn has_four(&self, cell: Cell) -> bool {
        self.winning_line(cell).is_some()
    }

    /// First four-in-a-row owned by `cell`, scanning start cells in
    /// row-major order and, per cell, directions in [`DIRECTIONS`] order.
    pub fn winning_line(&self, cell: Cell) -> Option<[(usize, usize); RUN]> {
        if cell.is_empty() {
            return None;
        }

        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.run_from(row, col, dr, dc, cell) {
                        return Some(line);
                    }
                }
            }
        }

        None
    }

    /// The `RUN` coordinates starting at (row, col) along (dr, dc), if all of
    /// them are in bounds and hold `cell`.
    fn run_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
    ) -> Option<[(usize, usize); RUN]> {
        let mut line = [(0, 0); RUN];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= HEIGHT || c >= WIDTH || self.cells[r][c] != cell {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }

    /// Build a board from text rows, top row first. `1` and `2` are pieces,
    /// anything else is empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; HEIGHT]) -> Self {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(WIDTH).enumerate() {
                board.cells[r][c] = match ch {
                    '1' => Cell::Player1,
                    '2' => Cell::Player2,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
