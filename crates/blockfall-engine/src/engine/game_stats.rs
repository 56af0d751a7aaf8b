/// Points awarded for each cleared row.
///
/// Rows cleared together each score the same; there is no multi-row bonus.
pub const SCORE_PER_ROW: usize = 10;

/// Game statistics tracking score, cleared rows, and locked pieces.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_lock(2);
///
/// assert_eq!(stats.score(), 20);
/// assert_eq!(stats.total_cleared_rows(), 2);
/// assert_eq!(stats.locked_pieces(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    locked_pieces: usize,
    total_cleared_rows: usize,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            total_cleared_rows: 0,
        }
    }

    /// Returns the current score. Never decreases.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the total number of pieces that have been locked into the grid.
    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    /// Returns the total number of rows cleared so far.
    #[must_use]
    pub const fn total_cleared_rows(&self) -> usize {
        self.total_cleared_rows
    }

    /// Updates statistics after a piece lock that cleared `cleared_rows` rows.
    pub const fn complete_piece_lock(&mut self, cleared_rows: usize) {
        self.locked_pieces += 1;
        self.total_cleared_rows += cleared_rows;
        self.score += SCORE_PER_ROW * cleared_rows;
    }
}
