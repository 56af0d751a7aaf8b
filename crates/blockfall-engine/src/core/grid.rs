use arrayvec::ArrayVec;

use super::{
    COLUMNS, ROWS,
    piece::{Piece, PieceKind},
};

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell (no piece).
    #[default]
    Empty,
    /// Locked cell of a specific piece kind.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Piece(kind) => Some(kind),
        }
    }
}

/// A single row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRow {
    cells: [Cell; COLUMNS],
}

impl GridRow {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; COLUMNS],
    };

    #[must_use]
    pub fn cells(&self) -> &[Cell; COLUMNS] {
        &self.cells
    }

    /// A row is complete when every column is non-empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }
}

/// Indices of complete rows, in ascending (top-to-bottom) order.
pub type CompleteRows = ArrayVec<usize, ROWS>;

/// Fixed-size matrix of locked cells.
///
/// The grid is [`COLUMNS`] wide and [`ROWS`] tall, with row 0 at the top.
/// Cells are written only by [`Grid::lock`] and emptied only by
/// [`Grid::clear_row`].
///
/// # Example
///
/// ```
/// use blockfall_engine::{Grid, Piece, PieceKind};
///
/// let mut grid = Grid::EMPTY;
/// let piece = Piece::spawn(PieceKind::O).translated(0, 19);
/// grid.lock(&piece);
///
/// assert!(grid.is_occupied(6, 19));
/// assert!(grid.find_complete_rows().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        rows: [GridRow::EMPTY; ROWS],
    };

    fn index(col: i32, row: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(col).ok().filter(|&col| col < COLUMNS)?;
        let row = usize::try_from(row).ok().filter(|&row| row < ROWS)?;
        Some((col, row))
    }

    /// Returns the cell at `(col, row)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        let (col, row) = Self::index(col, row)?;
        Some(self.rows[row].cells[col])
    }

    /// Returns whether `(col, row)` holds a locked cell.
    ///
    /// Rows above the grid (`row < 0`) are never occupied. Out-of-range columns
    /// and rows below the grid report `false`; bounds are the collision
    /// checker's concern.
    #[must_use]
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        if row < 0 {
            return false;
        }
        self.cell(col, row).is_some_and(|cell| !cell.is_empty())
    }

    /// Returns the row at `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than [`ROWS`].
    #[must_use]
    pub fn row(&self, row: usize) -> &GridRow {
        &self.rows[row]
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &GridRow> {
        self.rows.iter()
    }

    /// Writes the piece's kind into every cell it covers.
    ///
    /// The caller must have verified the placement with
    /// [`fits`](super::collision::fits). Cells above the top row cannot be
    /// stored and are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for (col, row) in piece.occupied_positions() {
            if let Some((col, row)) = Self::index(col, row) {
                self.rows[row].cells[col] = Cell::Piece(piece.kind());
            }
        }
    }

    /// Returns the indices of all complete rows, top to bottom.
    #[must_use]
    pub fn find_complete_rows(&self) -> CompleteRows {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_filled())
            .map(|(y, _)| y)
            .collect()
    }

    /// Removes `row` by shifting every row above it down by one.
    ///
    /// Rows `0..row` move to `1..=row` and row 0 becomes empty. Rows below
    /// `row` are untouched.
    pub fn clear_row(&mut self, row: usize) {
        assert!(row < ROWS, "row {row} is outside the grid");
        self.rows.copy_within(0..row, 1);
        self.rows[0] = GridRow::EMPTY;
    }

    /// Creates a grid from ASCII art, for tests and examples.
    ///
    /// Each line is one row of exactly [`COLUMNS`] characters: `.` for an empty
    /// cell or a piece letter (`I`, `O`, `S`, `Z`, `J`, `L`, `T`). Blank lines
    /// are ignored. The rows given are placed at the bottom of the grid.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut grid = Self::EMPTY;
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(
            lines.len() <= ROWS,
            "At most {ROWS} rows are allowed, got {}",
            lines.len()
        );

        let top = ROWS - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let cells: Vec<Cell> = line
                .chars()
                .map(|ch| match ch {
                    '.' => Cell::Empty,
                    ch => Cell::Piece(
                        PieceKind::from_char(ch)
                            .unwrap_or_else(|| panic!("invalid cell character {ch:?}")),
                    ),
                })
                .collect();
            assert_eq!(
                cells.len(),
                COLUMNS,
                "Each row must have exactly {COLUMNS} cells, got {} at row {i}",
                cells.len(),
            );
            grid.rows[top + i].cells.copy_from_slice(&cells);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, y: usize, kind: PieceKind) {
        grid.rows[y].cells = [Cell::Piece(kind); COLUMNS];
    }

    #[test]
    fn test_initial_grid_is_empty() {
        let grid = Grid::EMPTY;
        for (y, row) in grid.rows().enumerate() {
            assert!(row.is_empty(), "row {y} should be empty");
        }
        assert!(grid.find_complete_rows().is_empty());
    }

    #[test]
    fn test_rows_above_grid_are_never_occupied() {
        let mut grid = Grid::EMPTY;
        fill_row(&mut grid, 0, PieceKind::I);
        assert!(grid.is_occupied(3, 0));
        assert!(!grid.is_occupied(3, -1));
        assert!(!grid.is_occupied(3, -20));
    }

    #[test]
    fn test_out_of_range_lookups() {
        let grid = Grid::from_ascii("IIIIIIIIIIII");
        assert_eq!(grid.cell(-1, 19), None);
        assert_eq!(grid.cell(12, 19), None);
        assert_eq!(grid.cell(0, 20), None);
        assert!(!grid.is_occupied(12, 19));
        assert!(!grid.is_occupied(0, 20));
        assert_eq!(grid.cell(0, 19), Some(Cell::Piece(PieceKind::I)));
    }

    #[test]
    fn test_lock_writes_piece_kind() {
        let mut grid = Grid::EMPTY;
        let piece = Piece::spawn(PieceKind::T).translated(0, 10);
        grid.lock(&piece);

        for (col, row) in piece.occupied_positions() {
            assert_eq!(grid.cell(col, row), Some(Cell::Piece(PieceKind::T)));
        }
        let locked = grid
            .rows()
            .flat_map(|row| row.cells())
            .filter(|cell| !cell.is_empty())
            .count();
        assert_eq!(locked, 4);
    }

    #[test]
    fn test_lock_drops_cells_above_grid() {
        let mut grid = Grid::EMPTY;
        // I-piece at spawn covers rows 1, 0, -1 and -2.
        grid.lock(&Piece::spawn(PieceKind::I));

        assert!(grid.is_occupied(6, 0));
        assert!(grid.is_occupied(6, 1));
        assert!(
            grid.rows[ROWS - 1].is_empty(),
            "cells above the grid must not wrap around"
        );
    }

    #[test]
    fn test_find_complete_rows_in_order() {
        let grid = Grid::from_ascii(
            "
            IIIIIIIIIIII
            OOOOO.OOOOOO
            TTTTTTTTTTTT
            SSSSSSSSSSSS
            ",
        );
        let rows = grid.find_complete_rows();
        assert_eq!(rows.as_slice(), &[16, 18, 19]);
    }

    #[test]
    fn test_clear_row_shifts_rows_above_down() {
        let mut grid = Grid::from_ascii(
            "
            J...........
            .L..........
            IIIIIIIIIIII
            ..Z.........
            ",
        );
        grid.clear_row(18);

        assert!(grid.row(0).is_empty());
        assert_eq!(grid.cell(0, 17), Some(Cell::Piece(PieceKind::J)));
        assert_eq!(grid.cell(1, 18), Some(Cell::Piece(PieceKind::L)));
        // Rows below the cleared row stay put.
        assert_eq!(grid.cell(2, 19), Some(Cell::Piece(PieceKind::Z)));
        assert!(grid.find_complete_rows().is_empty());
    }

    #[test]
    fn test_clear_top_row() {
        let mut grid = Grid::EMPTY;
        fill_row(&mut grid, 0, PieceKind::O);
        grid.clear_row(0);
        assert_eq!(grid, Grid::EMPTY);
    }

    #[test]
    fn test_clear_complete_row_is_idempotent() {
        let mut grid = Grid::from_ascii("IIIIIIIIIIII");
        assert_eq!(grid.find_complete_rows().as_slice(), &[19]);

        grid.clear_row(19);
        assert!(grid.row(19).is_empty());
        assert!(grid.find_complete_rows().is_empty());
    }

    #[test]
    fn test_clear_rows_top_to_bottom_keeps_indices_valid() {
        let mut grid = Grid::from_ascii(
            "
            T...........
            IIIIIIIIIIII
            .O..........
            IIIIIIIIIIII
            ",
        );
        for row in grid.find_complete_rows() {
            grid.clear_row(row);
        }

        assert_eq!(grid.cell(0, 18), Some(Cell::Piece(PieceKind::T)));
        assert_eq!(grid.cell(1, 19), Some(Cell::Piece(PieceKind::O)));
        let locked = grid
            .rows()
            .flat_map(|row| row.cells())
            .filter(|cell| !cell.is_empty())
            .count();
        assert_eq!(locked, 2);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_row_outside_grid_panics() {
        let _ = Grid::EMPTY.row(ROWS);
    }

    #[test]
    #[should_panic(expected = "Each row must have exactly 12 cells")]
    fn test_from_ascii_rejects_short_rows() {
        let _ = Grid::from_ascii("III");
    }
}
