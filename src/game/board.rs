pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// The four line directions that can hold a winning run: horizontal,
/// vertical, and the two diagonals. Row deltas point downward.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A Connect Four grid with gravity. Row 0 is the top, row `rows - 1` the
/// bottom. Per-column fill heights make `drop_piece` and `undo_piece` O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("column is empty")]
    EmptyColumn,
    #[error("game is already over")]
    GameOver,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Number of tokens in a column.
    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col]
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.heights[col] == self.rows
    }

    /// Columns that can still accept a token, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&c| !self.is_column_full(c)).collect()
    }

    /// Drop a token into a column; returns the row where it landed.
    /// The board is untouched on error.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        if self.heights[col] == self.rows {
            return Err(MoveError::ColumnFull);
        }

        let row = self.rows - 1 - self.heights[col];
        self.set(row, col, cell);
        self.heights[col] += 1;
        Ok(row)
    }

    /// Remove the most recently placed token in a column; returns the row it
    /// was removed from.
    pub fn undo_piece(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        if self.heights[col] == 0 {
            return Err(MoveError::EmptyColumn);
        }

        let row = self.rows - self.heights[col];
        self.set(row, col, Cell::Empty);
        self.heights[col] -= 1;
        Ok(row)
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    /// Check whether the token at (row, col) completes a four-in-a-row.
    /// Only the lines through that cell are examined, so this is the cheap
    /// test to run after each drop.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.run_through(row, col, dir, cell) >= 4)
    }

    /// Full-board scan for any four-in-a-row of the given cell.
    pub fn has_four_in_a_row(&self, cell: Cell) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) != cell {
                    continue;
                }
                for &dir in &DIRECTIONS {
                    if self.run_from(row, col, dir, cell) >= 4 {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Length of the run of `cell` through (row, col) along one direction,
    /// counting both ways from the anchor.
    fn run_through(&self, row: usize, col: usize, (dr, dc): (i32, i32), cell: Cell) -> usize {
        1 + self.walk(row, col, (dr, dc), cell) + self.walk(row, col, (-dr, -dc), cell)
    }

    /// Length of the run of `cell` starting at (row, col) and extending along
    /// one direction only.
    fn run_from(&self, row: usize, col: usize, dir: (i32, i32), cell: Cell) -> usize {
        1 + self.walk(row, col, dir, cell)
    }

    /// Count matching cells strictly beyond (row, col) along a direction.
    fn walk(&self, row: usize, col: usize, (dr, dc): (i32, i32), cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while r >= 0
            && r < self.rows as i32
            && c >= 0
            && c < self.cols as i32
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
