//! Move representation.
//!
//! A move is either a single hop or a double hop. Moves are plain values:
//! equality and hashing cover every field, so a move picked by a caller can
//! be matched against the legal-move set directly.
//!
//! Downstream logic (ticket deduction, log update) matches on the variant
//! rather than dispatching through a visitor.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::graph::NodeId;
use super::piece::Piece;
use super::ticket::Ticket;

/// One hop along one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub mover: Piece,
    pub source: NodeId,
    pub ticket: Ticket,
    pub destination: NodeId,
}

/// Two hops in one turn, paid for with a `Double` ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub mover: Piece,
    pub source: NodeId,
    pub ticket1: Ticket,
    pub midpoint: NodeId,
    pub ticket2: Ticket,
    pub destination: NodeId,
}

/// A complete move.
///
/// ## Example
///
/// ```
/// use pursuit_engine::core::{Move, NodeId, Piece, Ticket};
///
/// let hop = Move::single(Piece::Fugitive, 1, Ticket::Taxi, 2);
/// assert_eq!(hop.destination(), NodeId::new(2));
/// assert_eq!(hop.tickets().as_slice(), &[Ticket::Taxi]);
///
/// let double = Move::double(Piece::Fugitive, 1, Ticket::Secret, 2, Ticket::Bus, 3);
/// assert_eq!(double.destination(), NodeId::new(3));
/// assert_eq!(double.tickets().as_slice(), &[Ticket::Secret, Ticket::Bus, Ticket::Double]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    #[must_use]
    pub fn single(
        mover: Piece,
        source: impl Into<NodeId>,
        ticket: Ticket,
        destination: impl Into<NodeId>,
    ) -> Self {
        Move::Single(SingleMove {
            mover,
            source: source.into(),
            ticket,
            destination: destination.into(),
        })
    }

    #[must_use]
    pub fn double(
        mover: Piece,
        source: impl Into<NodeId>,
        ticket1: Ticket,
        midpoint: impl Into<NodeId>,
        ticket2: Ticket,
        destination: impl Into<NodeId>,
    ) -> Self {
        Move::Double(DoubleMove {
            mover,
            source: source.into(),
            ticket1,
            midpoint: midpoint.into(),
            ticket2,
            destination: destination.into(),
        })
    }

    /// The piece making this move.
    #[must_use]
    pub fn mover(&self) -> Piece {
        match self {
            Move::Single(m) => m.mover,
            Move::Double(m) => m.mover,
        }
    }

    #[must_use]
    pub fn source(&self) -> NodeId {
        match self {
            Move::Single(m) => m.source,
            Move::Double(m) => m.source,
        }
    }

    /// Final destination (the second leg's destination for a double move).
    #[must_use]
    pub fn destination(&self) -> NodeId {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.destination,
        }
    }

    /// Ticket and destination of each leg, in travel order.
    #[must_use]
    pub fn legs(&self) -> SmallVec<[(Ticket, NodeId); 2]> {
        match self {
            Move::Single(m) => smallvec![(m.ticket, m.destination)],
            Move::Double(m) => smallvec![(m.ticket1, m.midpoint), (m.ticket2, m.destination)],
        }
    }

    /// Every ticket consumed, including the `Double` ticket itself.
    #[must_use]
    pub fn tickets(&self) -> SmallVec<[Ticket; 3]> {
        match self {
            Move::Single(m) => smallvec![m.ticket],
            Move::Double(m) => smallvec![m.ticket1, m.ticket2, Ticket::Double],
        }
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Single(m) => write!(f, "{}: {} -[{}]-> {}", m.mover, m.source.0, m.ticket, m.destination.0),
            Move::Double(m) => write!(
                f,
                "{}: {} -[{}]-> {} -[{}]-> {}",
                m.mover, m.source.0, m.ticket1, m.midpoint.0, m.ticket2, m.destination.0
            ),
        }
    }
}
