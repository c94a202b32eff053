//! # pursuit-engine
//!
//! Rules engine for a hidden-movement pursuit board game. One hidden
//! fugitive evades several visible seekers on a graph of locations linked
//! by typed transports. The fugitive's location is only shown on scheduled
//! reveal rounds; otherwise seekers work from the public log of tickets used.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: `GameState::advance` returns a new state.
//!    Old states stay valid, so callers can explore alternative lines from
//!    any retained snapshot.
//!
//! 2. **Derived round number**: the round index is the travel log's length,
//!    never a separate counter.
//!
//! 3. **Narrow surface**: loading boards, UI, AI and session persistence live
//!    outside the engine and talk to it through `Board`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`.
//!
//! - **Tagged moves**: `Move` is a sum type; everything downstream matches
//!   on the variant.
//!
//! ## Modules
//!
//! - `core`: pieces, tickets, graph, setup, players, moves, log, state
//! - `rules`: move generation, the `Board` trait, terminal conditions
//!
//! ## Example
//!
//! ```
//! use pursuit_engine::{Board, GameSetup, GameState, Player, Transport, TransportGraph};
//!
//! let graph = TransportGraph::new()
//!     .with_edge(1, 2, Transport::Taxi)
//!     .with_edge(2, 3, Transport::Bus)
//!     .with_edge(3, 4, Transport::Underground);
//! let setup = GameSetup::standard(graph).unwrap();
//!
//! let state = GameState::new(setup, Player::fugitive(1), [Player::seeker(0, 4)]).unwrap();
//! let mv = *state.available_moves().iter().next().unwrap();
//! let next = state.advance(&mv).unwrap();
//!
//! assert_eq!(next.travel_log().len(), 1);
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DoubleMove, EngineError, GameSetup, GameState, LogEntry, Move, NodeId, Piece, Player,
    SeekerId, SingleMove, Ticket, TicketBoard, TicketPurse, Transport, TransportGraph, TravelLog,
};

pub use crate::rules::{Board, MoveGenerator, Side, Victory};
