//! Tickets, transports and ticket purses.
//!
//! ## Ticket
//!
//! A ticket is spent to travel along one edge. The three ordinary tickets
//! match the ordinary transports. Two special tickets belong to the fugitive
//! only:
//! - `Secret`: rides any edge and hides the transport in the travel log
//! - `Double`: authorises two hops in one turn
//!
//! ## TicketPurse
//!
//! Per-player ticket counts. A purse tracks an explicit set of ticket types;
//! querying a type it does not track is an error rather than a silent zero.
//!
//! ## TicketBoard
//!
//! Read-only view of a purse handed out by `GameState::player_tickets`.

use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Ticket types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Double,
    Secret,
}

impl Ticket {
    /// Every ticket type, in declaration order.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Double,
        Ticket::Secret,
    ];

    /// Tickets that seekers may never hold.
    pub const FUGITIVE_ONLY: [Ticket; 2] = [Ticket::Double, Ticket::Secret];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Ticket::Taxi => "Taxi",
            Ticket::Bus => "Bus",
            Ticket::Underground => "Underground",
            Ticket::Double => "Double",
            Ticket::Secret => "Secret",
        }
    }

    /// Whether only the fugitive may hold this ticket.
    #[must_use]
    pub const fn is_fugitive_only(self) -> bool {
        matches!(self, Ticket::Double | Ticket::Secret)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ticket {
    type Err = EngineError;

    /// Parse a ticket name, case-insensitively.
    ///
    /// ```
    /// use pursuit_engine::core::Ticket;
    ///
    /// assert_eq!("secret".parse::<Ticket>().unwrap(), Ticket::Secret);
    /// assert!("boat".parse::<Ticket>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ticket::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownTicket(s.to_string()))
    }
}

/// Transport types that label graph edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

impl Transport {
    /// The ticket a player must spend to ride this transport.
    ///
    /// Ferries carry no ordinary ticket of their own and can only be ridden
    /// with a `Secret` ticket.
    #[must_use]
    pub const fn required_ticket(self) -> Ticket {
        match self {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Taxi => "Taxi",
            Transport::Bus => "Bus",
            Transport::Underground => "Underground",
            Transport::Ferry => "Ferry",
        };
        f.write_str(name)
    }
}

/// Ticket counts for one player.
///
/// ## Example
///
/// ```
/// use pursuit_engine::core::{Ticket, TicketPurse};
///
/// let purse = TicketPurse::empty()
///     .with(Ticket::Taxi, 2)
///     .with(Ticket::Bus, 1);
///
/// assert_eq!(purse.count(Ticket::Taxi), Ok(2));
/// assert!(purse.has(Ticket::Bus));
/// assert!(purse.count(Ticket::Secret).is_err()); // not tracked
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPurse {
    counts: FxHashMap<Ticket, u32>,
}

impl TicketPurse {
    /// A purse tracking no ticket types.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A purse tracking every ticket type, all at zero.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            counts: Ticket::ALL.into_iter().map(|t| (t, 0)).collect(),
        }
    }

    /// Starting purse for the fugitive in the standard game.
    #[must_use]
    pub fn fugitive_default() -> Self {
        Self::zeroed()
            .with(Ticket::Taxi, 4)
            .with(Ticket::Bus, 3)
            .with(Ticket::Underground, 3)
            .with(Ticket::Double, 2)
            .with(Ticket::Secret, 5)
    }

    /// Starting purse for a seeker in the standard game.
    #[must_use]
    pub fn seeker_default() -> Self {
        Self::zeroed()
            .with(Ticket::Taxi, 11)
            .with(Ticket::Bus, 8)
            .with(Ticket::Underground, 4)
    }

    /// Set the count for a ticket type, tracking it if it was not tracked.
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts.insert(ticket, count);
        self
    }

    /// Count of a ticket type.
    ///
    /// Fails with `UntrackedTicket` when the purse does not track `ticket`.
    pub fn count(&self, ticket: Ticket) -> Result<u32, EngineError> {
        self.counts
            .get(&ticket)
            .copied()
            .ok_or(EngineError::UntrackedTicket(ticket))
    }

    /// Count of a ticket type, treating untracked types as zero.
    #[must_use]
    pub fn count_or_zero(&self, ticket: Ticket) -> u32 {
        self.counts.get(&ticket).copied().unwrap_or(0)
    }

    /// Whether the purse holds at least one of `ticket`.
    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.has_at_least(ticket, 1)
    }

    #[must_use]
    pub fn has_at_least(&self, ticket: Ticket, count: u32) -> bool {
        self.count_or_zero(ticket) >= count
    }

    /// Whether every tracked count is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Whether `ticket` is tracked by this purse.
    #[must_use]
    pub fn tracks(&self, ticket: Ticket) -> bool {
        self.counts.contains_key(&ticket)
    }

    /// Iterate over tracked (ticket, count) pairs in ticket order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL
            .into_iter()
            .filter_map(|t| self.counts.get(&t).map(|&c| (t, c)))
    }

    /// Remove one of each given ticket.
    ///
    /// Counts saturate at zero; callers only spend tickets that a legal move
    /// has already shown to be affordable.
    #[must_use]
    pub fn spend(&self, tickets: &[Ticket]) -> Self {
        let mut next = self.clone();
        for &ticket in tickets {
            let count = next.counts.entry(ticket).or_insert(0);
            debug_assert!(*count > 0, "spending a {} ticket that is not held", ticket);
            *count = count.saturating_sub(1);
        }
        next
    }

    /// Add one of each given ticket, tracking new types as needed.
    #[must_use]
    pub fn receive(&self, tickets: &[Ticket]) -> Self {
        let mut next = self.clone();
        for &ticket in tickets {
            *next.counts.entry(ticket).or_insert(0) += 1;
        }
        next
    }
}

/// Read-only view of one player's tickets.
#[derive(Clone, Copy, Debug)]
pub struct TicketBoard<'a> {
    purse: &'a TicketPurse,
}

impl<'a> TicketBoard<'a> {
    #[must_use]
    pub fn new(purse: &'a TicketPurse) -> Self {
        Self { purse }
    }

    /// Remaining count of `ticket`; fails if the purse does not track it.
    pub fn count(&self, ticket: Ticket) -> Result<u32, EngineError> {
        self.purse.count(ticket)
    }

    /// Remaining count of a ticket given by name.
    ///
    /// Fails with `UnknownTicket` for names outside the ticket set.
    pub fn count_named(&self, name: &str) -> Result<u32, EngineError> {
        self.count(name.parse()?)
    }

    /// True when the player has no tickets of any kind left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.purse.is_empty()
    }

    /// The underlying purse.
    #[must_use]
    pub fn purse(&self) -> &'a TicketPurse {
        self.purse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_tickets() {
        assert_eq!(Transport::Taxi.required_ticket(), Ticket::Taxi);
        assert_eq!(Transport::Bus.required_ticket(), Ticket::Bus);
        assert_eq!(Transport::Underground.required_ticket(), Ticket::Underground);
        assert_eq!(Transport::Ferry.required_ticket(), Ticket::Secret);
    }

    #[test]
    fn test_ticket_parse() {
        assert_eq!("Taxi".parse::<Ticket>(), Ok(Ticket::Taxi));
        assert_eq!(" underground ".parse::<Ticket>(), Ok(Ticket::Underground));
        assert_eq!(
            "Ferry".parse::<Ticket>(),
            Err(EngineError::UnknownTicket("Ferry".to_string()))
        );
    }

    #[test]
    fn test_purse_defaults() {
        let fugitive = TicketPurse::fugitive_default();
        assert_eq!(fugitive.count(Ticket::Secret), Ok(5));
        assert_eq!(fugitive.count(Ticket::Double), Ok(2));

        let seeker = TicketPurse::seeker_default();
        assert_eq!(seeker.count(Ticket::Taxi), Ok(11));
        assert_eq!(seeker.count(Ticket::Secret), Ok(0));
        assert!(!seeker.has(Ticket::Double));
    }

    #[test]
    fn test_purse_spend_and_receive() {
        let purse = TicketPurse::zeroed().with(Ticket::Taxi, 2).with(Ticket::Bus, 1);

        let spent = purse.spend(&[Ticket::Taxi, Ticket::Bus]);
        assert_eq!(spent.count(Ticket::Taxi), Ok(1));
        assert_eq!(spent.count(Ticket::Bus), Ok(0));

        // Original purse untouched
        assert_eq!(purse.count(Ticket::Taxi), Ok(2));

        let received = spent.receive(&[Ticket::Bus, Ticket::Bus]);
        assert_eq!(received.count(Ticket::Bus), Ok(2));
    }

    #[test]
    fn test_purse_untracked() {
        let purse = TicketPurse::empty().with(Ticket::Taxi, 1);

        assert_eq!(purse.count(Ticket::Bus), Err(EngineError::UntrackedTicket(Ticket::Bus)));
        assert_eq!(purse.count_or_zero(Ticket::Bus), 0);
        assert!(!purse.tracks(Ticket::Bus));

        // Receiving starts tracking
        let purse = purse.receive(&[Ticket::Bus]);
        assert_eq!(purse.count(Ticket::Bus), Ok(1));
    }

    #[test]
    fn test_purse_is_empty() {
        assert!(TicketPurse::empty().is_empty());
        assert!(TicketPurse::zeroed().is_empty());
        assert!(!TicketPurse::zeroed().with(Ticket::Secret, 1).is_empty());
    }

    #[test]
    fn test_ticket_board() {
        let purse = TicketPurse::zeroed().with(Ticket::Underground, 3);
        let board = TicketBoard::new(&purse);

        assert_eq!(board.count(Ticket::Underground), Ok(3));
        assert_eq!(board.count_named("underground"), Ok(3));
        assert!(matches!(board.count_named("Rocket"), Err(EngineError::UnknownTicket(_))));
        assert!(!board.is_empty());
    }

    #[test]
    fn test_purse_iter_order() {
        let purse = TicketPurse::empty().with(Ticket::Secret, 1).with(Ticket::Taxi, 2);
        let pairs: Vec<_> = purse.iter().collect();
        assert_eq!(pairs, vec![(Ticket::Taxi, 2), (Ticket::Secret, 1)]);
    }
}
