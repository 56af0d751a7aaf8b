use crate::{Grid, Piece, PieceColor};

/// Drawing target for the engine.
///
/// A front end implements this trait and hands it to
/// [`Engine::render`](crate::Engine::render), which redraws the locked grid,
/// the falling piece and the title in that order.
pub trait Surface {
    /// Draws every locked cell of the grid.
    fn draw_grid(&mut self, grid: &Grid);

    /// Draws the falling piece in its kind's color.
    fn draw_piece(&mut self, piece: &Piece, color: PieceColor);

    /// Removes any previously drawn falling piece.
    fn clear_piece_drawing(&mut self);

    /// Sets the window (or panel) title.
    fn set_title(&mut self, title: &str);
}
