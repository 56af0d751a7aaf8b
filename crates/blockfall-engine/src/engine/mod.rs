//! Game engine logic and state management.
//!
//! This module drives the core data structures through a game:
//!
//! - [`Engine`] - The state machine owning the grid, the falling piece and the score
//! - [`GameStats`] - Score and counters
//! - [`PieceGenerator`] - Uniform random piece kinds
//! - [`PieceSeed`] - Seed for deterministic piece generation
//!
//! # Game Flow
//!
//! 1. A tick with no falling piece spawns one at the top
//! 2. Each later tick moves it down one row, or locks it when it cannot move
//! 3. Locking clears complete rows and adds to the score
//! 4. Input events move, rotate or hard-drop the falling piece in between ticks
//! 5. The game ends when a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Engine, GameInput, PieceSeed};
//!
//! let mut engine = Engine::with_seed(PieceSeed::from(7));
//!
//! engine.tick(); // spawn
//! engine.handle_input(GameInput::MoveLeft);
//! engine.handle_input(GameInput::HardDrop);
//! engine.tick(); // lock
//!
//! assert_eq!(engine.stats().locked_pieces(), 1);
//! assert!(!engine.is_game_over());
//! ```

pub use self::{game_engine::*, game_stats::*, piece_generator::*};

mod game_engine;
mod game_stats;
mod piece_generator;
