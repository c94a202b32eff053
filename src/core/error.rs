//! Engine error taxonomy.
//!
//! Every failure is synchronous and local. The engine never retries; callers
//! fix their inputs (construction), re-query the legal moves (illegal move),
//! or ask for a ticket type that exists (ticket queries).

use thiserror::Error;

use super::action::Move;
use super::graph::NodeId;
use super::piece::{Piece, SeekerId};
use super::ticket::Ticket;

/// Errors raised by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("round schedule is empty")]
    EmptyRounds,

    #[error("transport graph has no nodes or no edges")]
    EmptyGraph,

    #[error("{seeker} holds {ticket} tickets, which only the fugitive may use")]
    FugitiveTicketHeld { seeker: SeekerId, ticket: Ticket },

    #[error("{first} and {second} both start at {location}")]
    SharedLocation {
        first: SeekerId,
        second: SeekerId,
        location: NodeId,
    },

    #[error("{0} appears more than once")]
    DuplicatePiece(Piece),

    #[error("{0} supplied in the wrong role")]
    MisplacedPiece(Piece),

    #[error("{piece} is at {node}, which is not on the board")]
    UnknownNode { piece: Piece, node: NodeId },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("unknown ticket type: {0:?}")]
    UnknownTicket(String),

    #[error("purse does not track {0} tickets")]
    UntrackedTicket(Ticket),
}
