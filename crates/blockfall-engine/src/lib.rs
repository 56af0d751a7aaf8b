//! Game-state core for a single-player falling-block puzzle.
//!
//! The crate is split into two layers:
//!
//! - [`core`] - the grid, piece geometry and the collision predicate
//! - [`engine`] - the tick/input driven state machine built on top of them
//!
//! Drawing is delegated to a [`Surface`] implemented by the front end.

pub use self::{core::*, engine::*, surface::Surface};

pub mod core;
pub mod engine;
mod surface;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding when setting falling piece")]
pub struct PieceCollisionError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("no piece is falling")]
    NoFallingPiece,
    #[display("piece colliding when moving falling piece")]
    PieceCollision(PieceCollisionError),
}

impl From<PieceCollisionError> for MoveError {
    fn from(err: PieceCollisionError) -> Self {
        MoveError::PieceCollision(err)
    }
}
