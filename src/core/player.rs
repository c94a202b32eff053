//! Player values.
//!
//! A `Player` is an immutable triple of piece, location and ticket purse.
//! "Mutators" such as `at` and `spend` return a new value.

use serde::{Deserialize, Serialize};

use super::graph::NodeId;
use super::piece::Piece;
use super::ticket::{Ticket, TicketPurse};

/// A piece on the board together with its tickets.
///
/// ## Example
///
/// ```
/// use pursuit_engine::core::{NodeId, Piece, Player, Ticket, TicketPurse};
///
/// let fugitive = Player::new(Piece::Fugitive, 45, TicketPurse::fugitive_default());
/// let moved = fugitive.spend(&[Ticket::Taxi]).at(NodeId::new(46));
///
/// assert_eq!(fugitive.location(), NodeId::new(45));
/// assert_eq!(moved.location(), NodeId::new(46));
/// assert_eq!(moved.tickets().count(Ticket::Taxi), Ok(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    location: NodeId,
    tickets: TicketPurse,
}

impl Player {
    #[must_use]
    pub fn new(piece: Piece, location: impl Into<NodeId>, tickets: TicketPurse) -> Self {
        Self {
            piece,
            location: location.into(),
            tickets,
        }
    }

    /// The fugitive with the standard starting purse.
    #[must_use]
    pub fn fugitive(location: impl Into<NodeId>) -> Self {
        Self::new(Piece::Fugitive, location, TicketPurse::fugitive_default())
    }

    /// A seeker with the standard starting purse.
    #[must_use]
    pub fn seeker(id: u8, location: impl Into<NodeId>) -> Self {
        Self::new(Piece::seeker(id), location, TicketPurse::seeker_default())
    }

    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub fn location(&self) -> NodeId {
        self.location
    }

    #[must_use]
    pub fn tickets(&self) -> &TicketPurse {
        &self.tickets
    }

    #[must_use]
    pub fn is_fugitive(&self) -> bool {
        self.piece.is_fugitive()
    }

    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }

    #[must_use]
    pub fn has_at_least(&self, ticket: Ticket, count: u32) -> bool {
        self.tickets.has_at_least(ticket, count)
    }

    /// Copy of this player standing at `location`.
    #[must_use]
    pub fn at(&self, location: NodeId) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    /// Copy of this player with one of each of `tickets` removed.
    #[must_use]
    pub fn spend(&self, tickets: &[Ticket]) -> Self {
        Self {
            tickets: self.tickets.spend(tickets),
            ..self.clone()
        }
    }

    /// Copy of this player with one of each of `tickets` added.
    #[must_use]
    pub fn receive(&self, tickets: &[Ticket]) -> Self {
        Self {
            tickets: self.tickets.receive(tickets),
            ..self.clone()
        }
    }
}
