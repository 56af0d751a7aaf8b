use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::COLUMNS_I32;

/// A falling piece: a kind, its current cell offsets, and an anchor position.
///
/// Pieces are immutable values. Movement and rotation return candidate pieces
/// that the caller validates with [`fits`](super::collision::fits) before
/// committing them.
///
/// # Coordinate System
///
/// - Columns grow rightward, rows grow downward
/// - The anchor is the origin cell of the offsets
/// - Rows above the grid (negative) are valid for a falling piece
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, PieceKind, PiecePosition};
///
/// let piece = Piece::spawn(PieceKind::T);
/// assert_eq!(piece.position(), PiecePosition::SPAWN);
///
/// let moved = piece.translated(-1, 0);
/// let rotated = moved.rotated();
/// assert_eq!(rotated.position(), moved.position());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    offsets: CellOffsets,
    position: PiecePosition,
}

impl Piece {
    /// Creates a piece of the given kind at the spawn position with its base shape.
    #[must_use]
    pub const fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            offsets: kind.base_offsets(),
            position: PiecePosition::SPAWN,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn offsets(&self) -> &CellOffsets {
        &self.offsets
    }

    #[must_use]
    pub const fn position(&self) -> PiecePosition {
        self.position
    }

    /// Returns the absolute `(col, row)` of every cell of the piece.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets.iter().map(move |offset| {
            (
                self.position.col + offset.dx,
                self.position.row + offset.dy,
            )
        })
    }

    /// Returns the piece turned a quarter turn about its anchor cell.
    ///
    /// Every offset `(dx, dy)` becomes `(dy, -dx)`. The anchor does not move,
    /// so shapes that are not symmetric about their origin shift visually.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            offsets: self.offsets.map(CellOffset::rotated),
            ..*self
        }
    }

    /// Returns the piece with its anchor moved by `dc` columns and `dr` rows.
    #[must_use]
    pub const fn translated(&self, dc: i32, dr: i32) -> Self {
        Self {
            position: self.position.translated(dc, dr),
            ..*self
        }
    }

    #[must_use]
    pub const fn left(&self) -> Self {
        self.translated(-1, 0)
    }

    #[must_use]
    pub const fn right(&self) -> Self {
        self.translated(1, 0)
    }

    #[must_use]
    pub const fn down(&self) -> Self {
        self.translated(0, 1)
    }
}

/// Anchor position of a piece.
///
/// Signed so that a piece may hang above the top row while it enters the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePosition {
    col: i32,
    row: i32,
}

impl PiecePosition {
    /// Spawn anchor: the middle column (integer division) of the top row.
    pub const SPAWN: Self = Self::new(COLUMNS_I32 / 2, 0);

    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[must_use]
    pub const fn translated(self, dc: i32, dr: i32) -> Self {
        Self::new(self.col + dc, self.row + dr)
    }
}

/// Offset of one piece cell relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellOffset {
    dx: i32,
    dy: i32,
}

impl CellOffset {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub const fn dx(self) -> i32 {
        self.dx
    }

    #[must_use]
    pub const fn dy(self) -> i32 {
        self.dy
    }

    /// `(dx, dy) -> (dy, -dx)`
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self::new(self.dy, -self.dx)
    }
}

/// The four cells of a piece, in shape-table order.
pub type CellOffsets = [CellOffset; 4];

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

/// Every kind is equally likely.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Returns the spawn-orientation cell offsets of this kind.
    #[must_use]
    pub const fn base_offsets(self) -> CellOffsets {
        PIECE_SHAPES[self as usize]
    }

    /// Returns the display color of this kind.
    #[must_use]
    pub const fn color(self) -> PieceColor {
        match self {
            PieceKind::O => PieceColor::Blue,
            PieceKind::S => PieceColor::Red,
            PieceKind::T => PieceColor::Yellow,
            PieceKind::I => PieceColor::Green,
            PieceKind::L => PieceColor::Purple,
            PieceKind::J => PieceColor::Orange,
            PieceKind::Z => PieceColor::Cyan,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::T => 'T',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'T' => Some(PieceKind::T),
            _ => None,
        }
    }
}

/// Display color of a piece kind. Each kind maps to exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PieceColor {
    Blue,
    Red,
    Yellow,
    Green,
    Purple,
    Orange,
    Cyan,
}

// Indexed by `PieceKind as usize`. Every shape contains the origin cell.
const PIECE_SHAPES: [CellOffsets; PieceKind::LEN] = {
    const fn c(dx: i32, dy: i32) -> CellOffset {
        CellOffset::new(dx, dy)
    }

    [
        // I-piece
        [c(0, 1), c(0, 0), c(0, -1), c(0, -2)],
        // O-piece
        [c(-1, -1), c(0, -1), c(-1, 0), c(0, 0)],
        // S-piece
        [c(-1, 0), c(0, 0), c(0, -1), c(1, -1)],
        // Z-piece
        [c(-1, -1), c(0, -1), c(0, 0), c(1, 0)],
        // J-piece
        [c(-1, 0), c(0, 0), c(0, -1), c(0, -2)],
        // L-piece
        [c(-1, 0), c(0, 0), c(-1, -1), c(-1, -2)],
        // T-piece
        [c(-1, 0), c(0, 0), c(0, -1), c(1, 0)],
    ]
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    fn sorted_offsets(piece: &Piece) -> Vec<CellOffset> {
        let mut offsets = piece.offsets().to_vec();
        offsets.sort();
        offsets
    }

    #[test]
    fn test_spawn_uses_middle_column_and_base_shape() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind);
            assert_eq!(piece.position(), PiecePosition::new(6, 0));
            assert_eq!(piece.offsets(), &kind.base_offsets());
            assert_eq!(piece.kind(), kind);
        }
    }

    #[test]
    fn test_every_shape_has_four_distinct_cells_including_origin() {
        for kind in PieceKind::ALL {
            let offsets = kind.base_offsets();
            let distinct: HashSet<_> = offsets.iter().collect();
            assert_eq!(distinct.len(), 4, "{kind} has duplicated cells");
            assert!(
                offsets.contains(&CellOffset::new(0, 0)),
                "{kind} does not cover its anchor cell",
            );
        }
    }

    #[test]
    fn test_rotation_transform() {
        let piece = Piece::spawn(PieceKind::T).rotated();
        assert_eq!(
            piece.offsets(),
            &[
                CellOffset::new(0, 1),
                CellOffset::new(0, 0),
                CellOffset::new(-1, 0),
                CellOffset::new(0, -1),
            ]
        );
        assert_eq!(piece.position(), PiecePosition::SPAWN);
    }

    #[test]
    fn test_four_rotations_restore_offsets() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind).translated(2, 7);
            let turned = piece.rotated().rotated().rotated().rotated();
            assert_eq!(turned, piece, "{kind} is not a 4-cycle");
        }
    }

    #[test]
    fn test_rotation_is_about_origin_not_center() {
        // The O-piece is not symmetric about its origin, so it drifts when turned.
        let piece = Piece::spawn(PieceKind::O);
        let rotated = piece.rotated();
        assert_ne!(sorted_offsets(&rotated), sorted_offsets(&piece));
        assert_eq!(rotated.offsets()[0], CellOffset::new(-1, 1));
    }

    #[test]
    fn test_translation_moves_anchor_only() {
        let piece = Piece::spawn(PieceKind::S);
        let moved = piece.translated(-3, 5);
        assert_eq!(moved.position(), PiecePosition::new(3, 5));
        assert_eq!(moved.offsets(), piece.offsets());
        assert_eq!(piece.left().position().col(), 5);
        assert_eq!(piece.right().position().col(), 7);
        assert_eq!(piece.down().position().row(), 1);
    }

    #[test]
    fn test_occupied_positions_add_anchor() {
        let piece = Piece::spawn(PieceKind::I).translated(0, 2);
        let cells: Vec<_> = piece.occupied_positions().collect();
        assert_eq!(cells, vec![(6, 3), (6, 2), (6, 1), (6, 0)]);
    }

    #[test]
    fn test_piece_colors_are_unique() {
        let colors: HashSet<_> = PieceKind::ALL.iter().map(|kind| kind.color()).collect();
        assert_eq!(colors.len(), PieceKind::LEN);
        assert_eq!(PieceKind::O.color(), PieceColor::Blue);
        assert_eq!(PieceKind::Z.color(), PieceColor::Cyan);
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('X'), None);
        assert_eq!(PieceKind::from_char('.'), None);
    }

    #[test]
    fn test_random_kinds_cover_all_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<PieceKind> = (0..500).map(|_| rng.random()).collect();
        assert_eq!(seen.len(), PieceKind::LEN);
    }
}
