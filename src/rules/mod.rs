//! Game rules: move generation and the board surface.
//!
//! `MoveGenerator` decides what is legal on a given board. `Board` is the
//! trait callers drive a game through; `GameState` implements it.

pub mod engine;
pub mod moves;

pub use engine::{Board, Side, Victory};
pub use moves::{MoveGenerator, DOUBLE_MOVE_MIN_ROUNDS};
