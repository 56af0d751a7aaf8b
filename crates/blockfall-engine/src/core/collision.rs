//! Placement checks shared by movement, rotation, spawning and hard drop.

use super::{COLUMNS_I32, ROWS_I32, grid::Grid, piece::Piece};

/// Returns whether every cell of `piece` is inside the grid and unoccupied.
///
/// Left, right and bottom bounds are hard. There is no top bound: cells
/// above row 0 are always accepted and never collide.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Grid, Piece, PieceKind, fits};
///
/// let grid = Grid::EMPTY;
/// let piece = Piece::spawn(PieceKind::I);
/// assert!(fits(&grid, &piece));
/// assert!(!fits(&grid, &piece.translated(0, 19)));
/// ```
#[must_use]
pub fn fits(grid: &Grid, piece: &Piece) -> bool {
    piece.occupied_positions().all(|(col, row)| {
        (0..COLUMNS_I32).contains(&col) && row < ROWS_I32 && !grid.is_occupied(col, row)
    })
}

/// Returns how many rows `piece` can fall straight down before landing.
///
/// Each cell scans downward for the first occupied cell or the floor, and
/// the smallest clearance wins. Returns `None` when a cell already overlaps
/// a locked cell.
#[must_use]
pub fn drop_distance(grid: &Grid, piece: &Piece) -> Option<i32> {
    let mut distance = i32::MAX;
    for (col, row) in piece.occupied_positions() {
        if grid.is_occupied(col, row) {
            return None;
        }
        let obstacle = (row + 1..ROWS_I32)
            .find(|&y| grid.is_occupied(col, y))
            .unwrap_or(ROWS_I32);
        distance = distance.min(obstacle - row - 1);
    }
    Some(distance)
}
