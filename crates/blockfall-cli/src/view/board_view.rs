use blockfall_engine::{COLUMNS, Grid, Piece, PieceColor, ROWS, Surface};

/// Snapshot of what the engine drew, ready to be turned into widgets.
///
/// Locked cells and the falling piece are kept apart so that
/// [`Surface::clear_piece_drawing`] can erase the piece without touching the
/// grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: [[Option<PieceColor>; COLUMNS]; ROWS],
    piece_cells: Vec<(usize, usize)>,
    piece_color: Option<PieceColor>,
    title: String,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; COLUMNS]; ROWS],
            piece_cells: vec![],
            piece_color: None,
            title: String::new(),
        }
    }

    /// Returns the color shown at `(col, row)`. The falling piece is drawn
    /// over locked cells.
    #[must_use]
    pub fn color_at(&self, col: usize, row: usize) -> Option<PieceColor> {
        if self.piece_cells.contains(&(col, row)) {
            return self.piece_color;
        }
        self.cells[row][col]
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Surface for BoardView {
    fn draw_grid(&mut self, grid: &Grid) {
        for (view_row, grid_row) in self.cells.iter_mut().zip(grid.rows()) {
            for (view_cell, cell) in view_row.iter_mut().zip(grid_row.cells()) {
                *view_cell = cell.kind().map(|kind| kind.color());
            }
        }
    }

    fn draw_piece(&mut self, piece: &Piece, color: PieceColor) {
        // Cells above the top row are not visible.
        self.piece_cells = piece
            .occupied_positions()
            .filter_map(|(col, row)| {
                let col = usize::try_from(col).ok().filter(|&col| col < COLUMNS)?;
                let row = usize::try_from(row).ok().filter(|&row| row < ROWS)?;
                Some((col, row))
            })
            .collect();
        self.piece_color = Some(color);
    }

    fn clear_piece_drawing(&mut self) {
        self.piece_cells.clear();
        self.piece_color = None;
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }
}
