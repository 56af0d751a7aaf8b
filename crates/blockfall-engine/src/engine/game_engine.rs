use crate::{
    MoveError, PieceCollisionError, Surface,
    core::{
        collision::{drop_distance, fits},
        grid::Grid,
        piece::Piece,
    },
};

use super::{
    game_stats::GameStats,
    piece_generator::{PieceGenerator, PieceSeed},
};

/// State of the engine.
///
/// ```text
///                    tick: spawn fits
///   NoActivePiece ─────────────────────→ PieceFalling ─┐
///     │     ↑                                │   ↑     │ tick: fell
///     │     └────────── tick: locked ────────┘   └─────┘ input: moved
///     │ tick: spawn collides
///     ↓
///   GameOver (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EngineState {
    NoActivePiece,
    PieceFalling(Piece),
    GameOver,
}

/// Discrete player inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
}

/// Event driving the engine: the gravity tick or a player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Tick,
    Input(GameInput),
}

impl From<GameInput> for GameEvent {
    fn from(input: GameInput) -> Self {
        GameEvent::Input(input)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// A new piece entered the grid.
    Spawned(Piece),
    /// The falling piece moved down one row.
    Fell,
    /// The falling piece was locked and `cleared_rows` rows were removed.
    Locked { cleared_rows: usize },
    /// The new piece did not fit at the spawn position; the game is over.
    ToppedOut,
    /// The game was already over; nothing happened.
    Halted,
}

/// The game-state engine.
///
/// Owns the grid, the falling piece (through [`EngineState`]), the score and
/// the piece source. All mutation goes through [`Engine::tick`] and the input
/// operations, each of which validates against the grid before committing.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    state: EngineState,
    stats: GameStats,
    generator: PieceGenerator,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with an empty grid and a randomly seeded piece source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Like [`Self::new`], but with a deterministic piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_generator(PieceGenerator::with_seed(seed))
    }

    fn with_generator(generator: PieceGenerator) -> Self {
        Self {
            grid: Grid::EMPTY,
            state: EngineState::NoActivePiece,
            stats: GameStats::new(),
            generator,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn falling_piece(&self) -> Option<Piece> {
        match self.state {
            EngineState::PieceFalling(piece) => Some(piece),
            EngineState::NoActivePiece | EngineState::GameOver => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Returns the final score once the game is over.
    #[must_use]
    pub fn final_score(&self) -> Option<usize> {
        self.is_game_over().then(|| self.stats.score())
    }

    /// Dispatches a tick or an input event.
    pub fn step(&mut self, event: GameEvent) {
        match event {
            GameEvent::Tick => _ = self.tick(),
            GameEvent::Input(input) => self.handle_input(input),
        }
    }

    /// Advances gravity by one step.
    ///
    /// - Without a falling piece, spawns one; if it does not fit the game is over.
    /// - With a falling piece, moves it down one row, or locks it, clears
    ///   complete rows and scores them when it cannot move.
    /// - After game over, does nothing.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            EngineState::GameOver => TickOutcome::Halted,
            EngineState::NoActivePiece => self.spawn_piece(),
            EngineState::PieceFalling(piece) => {
                let moved = piece.down();
                if fits(&self.grid, &moved) {
                    self.state = EngineState::PieceFalling(moved);
                    return TickOutcome::Fell;
                }
                let cleared_rows = self.lock_piece(piece);
                TickOutcome::Locked { cleared_rows }
            }
        }
    }

    /// Applies a player input. Illegal moves are silently ignored.
    pub fn handle_input(&mut self, input: GameInput) {
        _ = match input {
            GameInput::MoveLeft => self.try_move_left(),
            GameInput::MoveRight => self.try_move_right(),
            GameInput::Rotate => self.try_rotate(),
            GameInput::HardDrop => self.hard_drop().map(|_| ()),
        };
    }

    pub fn try_move_left(&mut self) -> Result<(), MoveError> {
        let piece = self.require_falling_piece()?.left();
        self.set_falling_piece(piece)?;
        Ok(())
    }

    pub fn try_move_right(&mut self) -> Result<(), MoveError> {
        let piece = self.require_falling_piece()?.right();
        self.set_falling_piece(piece)?;
        Ok(())
    }

    /// Rotates the falling piece in place. There is no wall kick: a rotation
    /// that does not fit is rejected.
    pub fn try_rotate(&mut self) -> Result<(), MoveError> {
        let piece = self.require_falling_piece()?.rotated();
        self.set_falling_piece(piece)?;
        Ok(())
    }

    /// Moves the falling piece straight down as far as it fits.
    ///
    /// The piece is not locked here; the next tick locks it because it can no
    /// longer fall. Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> Result<i32, MoveError> {
        let piece = self.require_falling_piece()?;
        let distance = drop_distance(&self.grid, &piece).ok_or(PieceCollisionError)?;
        self.set_falling_piece(piece.translated(0, distance))?;
        Ok(distance)
    }

    /// Draws the grid, the falling piece and the score title onto `surface`.
    pub fn render<S>(&self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        surface.draw_grid(&self.grid);
        surface.clear_piece_drawing();
        if let Some(piece) = self.falling_piece() {
            surface.draw_piece(&piece, piece.kind().color());
        }
        surface.set_title(&format!("SCORES: {}", self.stats.score()));
    }

    fn require_falling_piece(&self) -> Result<Piece, MoveError> {
        self.falling_piece().ok_or(MoveError::NoFallingPiece)
    }

    fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !fits(&self.grid, &piece) {
            return Err(PieceCollisionError);
        }
        self.state = EngineState::PieceFalling(piece);
        Ok(())
    }

    fn spawn_piece(&mut self) -> TickOutcome {
        let piece = Piece::spawn(self.generator.next_kind());
        if !fits(&self.grid, &piece) {
            self.state = EngineState::GameOver;
            return TickOutcome::ToppedOut;
        }
        self.state = EngineState::PieceFalling(piece);
        TickOutcome::Spawned(piece)
    }

    fn lock_piece(&mut self, piece: Piece) -> usize {
        self.grid.lock(&piece);
        let cleared_rows = self.clear_complete_rows();
        self.stats.complete_piece_lock(cleared_rows);
        self.state = EngineState::NoActivePiece;
        cleared_rows
    }

    // Clearing a row only shifts rows above it, so indices found below stay
    // valid while clearing top to bottom.
    fn clear_complete_rows(&mut self) -> usize {
        let rows = self.grid.find_complete_rows();
        for &row in &rows {
            self.grid.clear_row(row);
        }
        rows.len()
    }
}
