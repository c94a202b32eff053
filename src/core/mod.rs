//! Core engine types: pieces, tickets, board, players, moves, log, state.
//!
//! Every type here is an immutable value. Anything that looks like a
//! mutation returns a new value and leaves the original untouched.

pub mod piece;
pub mod ticket;
pub mod graph;
pub mod config;
pub mod player;
pub mod action;
pub mod log;
pub mod error;
pub mod state;

pub use piece::{Piece, SeekerId};
pub use ticket::{Ticket, TicketBoard, TicketPurse, Transport};
pub use graph::{EdgeLabel, NodeId, TransportGraph};
pub use config::GameSetup;
pub use player::Player;
pub use action::{DoubleMove, Move, SingleMove};
pub use log::{LogEntry, TravelLog};
pub use error::EngineError;
pub use state::{GameState, DOUBLE_MOVE_GATE_ROUNDS};
