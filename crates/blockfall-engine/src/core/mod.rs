pub use self::{collision::*, grid::*, piece::*};

pub(crate) mod collision;
pub(crate) mod grid;
pub(crate) mod piece;

/// Number of columns in the grid.
pub const COLUMNS: usize = 12;
/// Number of rows in the grid.
pub const ROWS: usize = 20;

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const COLUMNS_I32: i32 = COLUMNS as i32;
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const ROWS_I32: i32 = ROWS as i32;
