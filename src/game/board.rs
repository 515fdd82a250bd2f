use std::fmt;

use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerA => 'R',
            Cell::PlayerB => 'Y',
        }
    }
}

/// Scan directions as (row step, column step) pairs. Rows grow upward.
/// The vertical axis only looks down: nothing can sit above the newest disc.
const AXES: [&[(isize, isize)]; 4] = [
    &[(0, -1), (0, 1)],
    &[(-1, 0)],
    &[(-1, -1), (1, 1)],
    &[(1, -1), (-1, 1)],
];

/// Gravity-fed rectangular grid. Cells live in a flat vector indexed
/// `row * columns + column` with row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    levels: Vec<usize>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> Self {
        Board {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
            levels: vec![0; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the cell at a specific position, `None` outside the grid.
    /// Row 0 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Next free row in a column; equals `rows()` once the column is full
    pub fn column_level(&self, col: usize) -> Option<usize> {
        self.levels.get(col).copied()
    }

    /// Check if a column is full. Columns outside the grid count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.levels.get(col).map_or(true, |&level| level >= self.rows)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Drop a disc in a 0-based column, returns the row where it landed.
    /// Nothing is written when the column is invalid or full.
    pub fn drop_disc(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.columns {
            return Err(MoveError::ColumnOutOfBounds {
                column: col as i64 + 1,
                max: self.columns,
            });
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col + 1 });
        }

        let row = self.levels[col];
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        self.levels[col] += 1;
        Ok(row)
    }

    /// Check whether the disc at (row, col) sits on a run of at least
    /// `min_align` same-coloured discs. Axes are tried horizontal, vertical,
    /// then the two diagonals, stopping at the first that qualifies.
    pub fn alignment_through(&self, row: usize, col: usize, min_align: usize) -> bool {
        let cell = match self.get(row, col) {
            Some(Cell::Empty) | None => return false,
            Some(cell) => cell,
        };

        AXES.iter().any(|directions| {
            let count = 1 + directions
                .iter()
                .map(|&(dr, dc)| self.run_length(row, col, dr, dc, cell))
                .sum::<usize>();
            count >= min_align
        })
    }

    /// Count contiguous `cell`s starting next to (row, col) in one direction
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0 && c >= 0 && self.get(r as usize, c as usize) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Text grid, top row first, with a numbered header row. Cells are as
    /// wide as the widest column number so labels stay over their column.
    pub fn render(&self) -> String {
        let width = self.columns.to_string().len();
        let mut out = String::with_capacity((self.columns * (width + 1) + 2) * (self.rows + 1));
        for col in 0..self.columns {
            out.push_str(&format!(" {:>width$}", col + 1));
        }
        out.push('\n');

        for row in (0..self.rows).rev() {
            for col in 0..self.columns {
                out.push_str(&format!("|{:>width$}", self.cells[self.index(row, col)].glyph()));
            }
            out.push_str("|\n");
        }
        out
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.get(DEFAULT_ROWS, 0), None);
        assert_eq!(board.get(0, DEFAULT_COLS), None);
    }

    #[test]
    fn test_drop_disc() {
        let mut board = Board::default();

        // First disc lands on the bottom row
        let row = board.drop_disc(3, Cell::PlayerA).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Some(Cell::PlayerA));

        // Second disc stacks on top of it
        let row = board.drop_disc(3, Cell::PlayerB).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Some(Cell::PlayerB));
        assert_eq!(board.column_level(3), Some(2));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..DEFAULT_ROWS {
            board.drop_disc(0, Cell::PlayerA).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(
            board.drop_disc(0, Cell::PlayerB),
            Err(MoveError::ColumnFull { column: 1 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_disc(7, Cell::PlayerA),
            Err(MoveError::ColumnOutOfBounds { column: 8, max: 7 })
        );
        assert!(board.is_column_full(7));
        assert_eq!(board.column_level(7), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 2);
        for col in 0..3 {
            for _ in 0..2 {
                board.drop_disc(col, Cell::PlayerA).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_alignment() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_disc(col, Cell::PlayerA).unwrap();
        }
        assert!(board.alignment_through(0, 2, 4));
        assert!(!board.alignment_through(0, 2, 5));
    }

    #[test]
    fn test_vertical_alignment() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_disc(3, Cell::PlayerB).unwrap();
        }
        assert!(board.alignment_through(3, 3, 4));
    }

    #[test]
    fn test_vertical_scan_only_looks_down() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_disc(3, Cell::PlayerB).unwrap();
        }
        // The bottom disc has three matching discs above it, which the
        // downward-only scan does not count.
        assert!(!board.alignment_through(0, 3, 4));
    }

    #[test]
    fn test_diagonal_up_alignment() {
        let mut board = Board::default();
        // Build a / diagonal of PlayerA discs
        board.drop_disc(0, Cell::PlayerA).unwrap();

        board.drop_disc(1, Cell::PlayerB).unwrap();
        board.drop_disc(1, Cell::PlayerA).unwrap();

        board.drop_disc(2, Cell::PlayerB).unwrap();
        board.drop_disc(2, Cell::PlayerB).unwrap();
        board.drop_disc(2, Cell::PlayerA).unwrap();

        board.drop_disc(3, Cell::PlayerB).unwrap();
        board.drop_disc(3, Cell::PlayerB).unwrap();
        board.drop_disc(3, Cell::PlayerB).unwrap();
        let row = board.drop_disc(3, Cell::PlayerA).unwrap();

        assert_eq!(row, 3);
        assert!(board.alignment_through(row, 3, 4));
        // Seeded from the middle of the run as well
        assert!(board.alignment_through(1, 1, 4));
    }

    #[test]
    fn test_diagonal_down_alignment() {
        let mut board = Board::default();
        // Build a \ diagonal of PlayerA discs
        board.drop_disc(6, Cell::PlayerA).unwrap();

        board.drop_disc(5, Cell::PlayerB).unwrap();
        board.drop_disc(5, Cell::PlayerA).unwrap();

        board.drop_disc(4, Cell::PlayerB).unwrap();
        board.drop_disc(4, Cell::PlayerB).unwrap();
        board.drop_disc(4, Cell::PlayerA).unwrap();

        board.drop_disc(3, Cell::PlayerB).unwrap();
        board.drop_disc(3, Cell::PlayerB).unwrap();
        board.drop_disc(3, Cell::PlayerB).unwrap();
        let row = board.drop_disc(3, Cell::PlayerA).unwrap();

        assert!(board.alignment_through(row, 3, 4));
    }

    #[test]
    fn test_no_alignment_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_disc(col, Cell::PlayerA).unwrap();
        }
        assert!(!board.alignment_through(0, 1, 4));
        assert!(board.alignment_through(0, 1, 3));
    }

    #[test]
    fn test_run_broken_by_other_player() {
        let mut board = Board::default();
        board.drop_disc(0, Cell::PlayerA).unwrap();
        board.drop_disc(1, Cell::PlayerA).unwrap();
        board.drop_disc(2, Cell::PlayerB).unwrap();
        board.drop_disc(3, Cell::PlayerA).unwrap();
        board.drop_disc(4, Cell::PlayerA).unwrap();
        assert!(!board.alignment_through(0, 4, 4));
    }

    #[test]
    fn test_empty_cell_has_no_alignment() {
        let board = Board::default();
        assert!(!board.alignment_through(0, 0, 1));
        assert!(!board.alignment_through(10, 10, 1));
    }

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(3, 2);
        assert_eq!(board.render(), " 1 2 3\n| | | |\n| | | |\n");
    }

    #[test]
    fn test_render_top_row_first() {
        let mut board = Board::new(3, 2);
        board.drop_disc(0, Cell::PlayerA).unwrap();
        board.drop_disc(0, Cell::PlayerB).unwrap();
        board.drop_disc(2, Cell::PlayerA).unwrap();
        assert_eq!(board.to_string(), " 1 2 3\n|Y| | |\n|R| |R|\n");
    }

    #[test]
    fn test_render_wide_board_keeps_labels_over_columns() {
        let mut board = Board::new(12, 2);
        board.drop_disc(9, Cell::PlayerA).unwrap();
        board.drop_disc(11, Cell::PlayerB).unwrap();

        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  1  2  3  4  5  6  7  8  9 10 11 12");
        assert_eq!(lines[1], "|  |  |  |  |  |  |  |  |  |  |  |  |");
        assert_eq!(lines[2], "|  |  |  |  |  |  |  |  |  | R|  | Y|");
        // Each label ends over the glyph of its column
        assert_eq!(lines[0].find("10").map(|i| i + 1), lines[2].find('R'));
        assert_eq!(lines[0].find("12").map(|i| i + 1), lines[2].find('Y'));
    }
}
