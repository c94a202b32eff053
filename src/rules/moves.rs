//! Legal move generation.
//!
//! `MoveGenerator` enumerates every move a player may make from the current
//! board. Legality depends only on seeker occupancy and the mover's ticket
//! holdings; there is no lookahead.
//!
//! ## Single moves
//!
//! For each neighbour of the mover's node not occupied by a seeker:
//! - one move per edge transport whose required ticket the mover holds
//! - one extra `Secret` move if the mover holds a secret ticket
//!
//! ## Double moves
//!
//! Two admissible hops in sequence. Each leg is paid either with its edge's
//! required ticket or with a `Secret` ticket, and the pair must be affordable
//! from the purse as a whole (two of the same ticket when both legs use it).
//!
//! Results are sets: the same move reached along two routes (e.g. a ferry
//! edge, whose required ticket is already `Secret`) collapses to one.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{DoubleMove, GameSetup, NodeId, Player, SingleMove, Ticket};

/// Rounds that must remain in the schedule before a double move is offered.
pub const DOUBLE_MOVE_MIN_ROUNDS: usize = 2;

/// Move enumeration over a fixed board snapshot.
///
/// ## Example
///
/// ```
/// use pursuit_engine::core::{GameSetup, Piece, Player, Ticket, TicketPurse, Transport, TransportGraph};
/// use pursuit_engine::rules::MoveGenerator;
///
/// let graph = TransportGraph::new()
///     .with_edge(1, 2, Transport::Taxi)
///     .with_edge(1, 3, Transport::Bus);
/// let setup = GameSetup::new(graph, vec![false; 5]).unwrap();
///
/// let fugitive = Player::new(Piece::Fugitive, 1, TicketPurse::zeroed().with(Ticket::Taxi, 1));
/// let seeker = Player::new(Piece::seeker(0), 3, TicketPurse::zeroed().with(Ticket::Bus, 1));
///
/// let generator = MoveGenerator::new(&setup, [&seeker]);
/// let moves = generator.single_moves(&fugitive);
/// assert_eq!(moves.len(), 1); // taxi to 2; bus to 3 is unaffordable and occupied
/// ```
#[derive(Clone, Debug)]
pub struct MoveGenerator<'a> {
    setup: &'a GameSetup,
    occupied: SmallVec<[NodeId; 8]>,
}

impl<'a> MoveGenerator<'a> {
    /// Create a generator for the board where `seekers` stand.
    ///
    /// Every seeker counts as an obstacle, including a seeker that is itself
    /// the mover (it never moves onto its own node, which is not adjacent).
    pub fn new<'p>(setup: &'a GameSetup, seekers: impl IntoIterator<Item = &'p Player>) -> Self {
        Self {
            setup,
            occupied: seekers.into_iter().map(Player::location).collect(),
        }
    }

    /// Whether a seeker stands on `node`.
    #[must_use]
    pub fn is_occupied(&self, node: NodeId) -> bool {
        self.occupied.contains(&node)
    }

    /// Unoccupied neighbours of `source`, with the tickets that each edge
    /// accepts without substitution.
    fn open_hops(&self, source: NodeId) -> impl Iterator<Item = (NodeId, SmallVec<[Ticket; 2]>)> + '_ {
        self.setup
            .graph()
            .adjacent(source)
            .filter(move |(destination, _)| !self.is_occupied(*destination))
            .map(|(destination, transports)| {
                let tickets: SmallVec<[Ticket; 2]> = transports.iter().map(|t| t.required_ticket()).collect();
                (destination, tickets)
            })
    }

    /// Every legal single move for `player` from its current node.
    #[must_use]
    pub fn single_moves(&self, player: &Player) -> FxHashSet<SingleMove> {
        self.single_moves_from(player, player.location())
    }

    /// Every legal single move for `player` starting at `source`.
    #[must_use]
    pub fn single_moves_from(&self, player: &Player, source: NodeId) -> FxHashSet<SingleMove> {
        let mut moves = FxHashSet::default();
        let has_secret = player.has(Ticket::Secret);

        for (destination, tickets) in self.open_hops(source) {
            let hop = |ticket| SingleMove {
                mover: player.piece(),
                source,
                ticket,
                destination,
            };

            for &ticket in &tickets {
                if player.has(ticket) {
                    moves.insert(hop(ticket));
                }
            }
            if has_secret {
                moves.insert(hop(Ticket::Secret));
            }
        }

        log::trace!("{} has {} single moves from {}", player.piece(), moves.len(), source);
        moves
    }

    /// Every legal double move for `player` from its current node.
    ///
    /// Empty unless the player holds a `Double` ticket and at least
    /// `DOUBLE_MOVE_MIN_ROUNDS` rounds remain.
    #[must_use]
    pub fn double_moves(&self, player: &Player, rounds_remaining: usize) -> FxHashSet<DoubleMove> {
        let mut moves = FxHashSet::default();
        if !player.has(Ticket::Double) || rounds_remaining < DOUBLE_MOVE_MIN_ROUNDS {
            return moves;
        }

        let source = player.location();
        let has_secret = player.has(Ticket::Secret);

        for (midpoint, first_tickets) in self.open_hops(source) {
            for &required1 in &first_tickets {
                // Prune only; `affords` decides each payment.
                if !player.has(required1) && !has_secret {
                    continue;
                }

                for (destination, second_tickets) in self.open_hops(midpoint) {
                    for &required2 in &second_tickets {
                        for (ticket1, ticket2) in payments(required1, required2) {
                            if affords(player, ticket1, ticket2) {
                                moves.insert(DoubleMove {
                                    mover: player.piece(),
                                    source,
                                    ticket1,
                                    midpoint,
                                    ticket2,
                                    destination,
                                });
                            }
                        }
                    }
                }
            }
        }

        log::trace!("{} has {} double moves from {}", player.piece(), moves.len(), source);
        moves
    }
}

/// Candidate ticket pairs for two legs: as required, or with either or both
/// legs paid by a secret ticket.
fn payments(required1: Ticket, required2: Ticket) -> [(Ticket, Ticket); 4] {
    [
        (required1, required2),
        (Ticket::Secret, required2),
        (required1, Ticket::Secret),
        (Ticket::Secret, Ticket::Secret),
    ]
}

/// Whether `player` can pay `first` then `second` from its purse.
fn affords(player: &Player, first: Ticket, second: Ticket) -> bool {
    if first == second {
        player.has_at_least(first, 2)
    } else {
        player.has(first) && player.has(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, TicketPurse, Transport, TransportGraph};

    fn setup(graph: TransportGraph) -> GameSetup {
        GameSetup::new(graph, vec![false; 10]).unwrap()
    }

    fn fugitive(at: u32, purse: TicketPurse) -> Player {
        Player::new(Piece::Fugitive, at, purse)
    }

    fn single(source: u32, ticket: Ticket, destination: u32) -> SingleMove {
        SingleMove {
            mover: Piece::Fugitive,
            source: NodeId::new(source),
            ticket,
            destination: NodeId::new(destination),
        }
    }

    #[test]
    fn test_single_moves_need_matching_ticket() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(1, 3, Transport::Bus),
        );
        let player = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 1));

        let moves = MoveGenerator::new(&setup, []).single_moves(&player);

        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&single(1, Ticket::Taxi, 2)));
    }

    #[test]
    fn test_single_moves_one_per_transport() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(1, 2, Transport::Bus),
        );
        let player = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 1).with(Ticket::Bus, 1));

        let moves = MoveGenerator::new(&setup, []).single_moves(&player);

        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&single(1, Ticket::Taxi, 2)));
        assert!(moves.contains(&single(1, Ticket::Bus, 2)));
    }

    #[test]
    fn test_secret_ticket_rides_any_edge_once() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(1, 2, Transport::Bus)
                .with_edge(1, 3, Transport::Ferry),
        );
        let player = fugitive(1, TicketPurse::zeroed().with(Ticket::Secret, 1));

        let moves = MoveGenerator::new(&setup, []).single_moves(&player);

        // One secret move per destination, no duplicates from multiple transports
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&single(1, Ticket::Secret, 2)));
        assert!(moves.contains(&single(1, Ticket::Secret, 3)));
    }

    #[test]
    fn test_occupied_destination_excluded() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(1, 3, Transport::Taxi),
        );
        let player = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 2).with(Ticket::Secret, 1));
        let seeker = Player::new(Piece::seeker(0), 3, TicketPurse::zeroed());

        let generator = MoveGenerator::new(&setup, [&seeker]);
        let moves = generator.single_moves(&player);

        assert!(generator.is_occupied(NodeId::new(3)));
        assert!(moves.iter().all(|m| m.destination != NodeId::new(3)));
        assert_eq!(moves.len(), 2); // taxi and secret to 2
    }

    #[test]
    fn test_no_moves_without_tickets() {
        let setup = setup(TransportGraph::new().with_edge(1, 2, Transport::Taxi));
        let player = fugitive(1, TicketPurse::zeroed());

        assert!(MoveGenerator::new(&setup, []).single_moves(&player).is_empty());
    }

    #[test]
    fn test_double_moves_require_double_ticket() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(2, 3, Transport::Taxi),
        );
        let player = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 2));

        assert!(MoveGenerator::new(&setup, []).double_moves(&player, 10).is_empty());
    }

    #[test]
    fn test_double_moves_same_ticket_needs_two() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(2, 3, Transport::Taxi),
        );
        let one = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 1).with(Ticket::Double, 1));
        let two = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 2).with(Ticket::Double, 1));

        let generator = MoveGenerator::new(&setup, []);
        assert!(generator.double_moves(&one, 10).is_empty());

        let moves = generator.double_moves(&two, 10);
        let expected = DoubleMove {
            mover: Piece::Fugitive,
            source: NodeId::new(1),
            ticket1: Ticket::Taxi,
            midpoint: NodeId::new(2),
            ticket2: Ticket::Taxi,
            destination: NodeId::new(3),
        };
        assert!(moves.contains(&expected));
        // 1 -> 2 -> 1 is also legal: the source is vacated
        assert!(moves.iter().any(|m| m.destination == NodeId::new(1)));
    }

    #[test]
    fn test_double_moves_mixed_tickets_need_one_each() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(2, 3, Transport::Bus),
        );
        let no_bus = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 1).with(Ticket::Double, 1));
        let both = no_bus.receive(&[Ticket::Bus]);

        let generator = MoveGenerator::new(&setup, []);
        assert!(generator
            .double_moves(&no_bus, 10)
            .iter()
            .all(|m| m.destination != NodeId::new(3)));
        assert!(generator
            .double_moves(&both, 10)
            .iter()
            .any(|m| m.ticket1 == Ticket::Taxi && m.ticket2 == Ticket::Bus && m.destination == NodeId::new(3)));
    }

    #[test]
    fn test_double_moves_secret_substitution() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(2, 3, Transport::Bus),
        );
        let player = fugitive(
            1,
            TicketPurse::zeroed()
                .with(Ticket::Taxi, 1)
                .with(Ticket::Secret, 1)
                .with(Ticket::Double, 1),
        );

        let moves = MoveGenerator::new(&setup, []).double_moves(&player, 10);
        let to_three: FxHashSet<_> = moves
            .iter()
            .filter(|m| m.destination == NodeId::new(3))
            .map(|m| (m.ticket1, m.ticket2))
            .collect();

        // Bus leg must be covered by the only secret ticket
        let expected: FxHashSet<_> = [(Ticket::Taxi, Ticket::Secret)].into_iter().collect();
        assert_eq!(to_three, expected);
    }

    #[test]
    fn test_double_moves_both_legs_secret() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Underground)
                .with_edge(2, 3, Transport::Ferry),
        );
        let one_secret = fugitive(1, TicketPurse::zeroed().with(Ticket::Secret, 1).with(Ticket::Double, 1));
        let two_secrets = fugitive(1, TicketPurse::zeroed().with(Ticket::Secret, 2).with(Ticket::Double, 1));

        let generator = MoveGenerator::new(&setup, []);
        assert!(generator
            .double_moves(&one_secret, 10)
            .iter()
            .all(|m| m.destination != NodeId::new(3)));

        let moves = generator.double_moves(&two_secrets, 10);
        assert!(moves
            .iter()
            .any(|m| m.destination == NodeId::new(3) && m.ticket1 == Ticket::Secret && m.ticket2 == Ticket::Secret));
        assert!(moves.iter().all(|m| m.ticket1 == Ticket::Secret && m.ticket2 == Ticket::Secret));
    }

    #[test]
    fn test_double_moves_round_gate() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(2, 3, Transport::Taxi),
        );
        let player = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 2).with(Ticket::Double, 1));

        let generator = MoveGenerator::new(&setup, []);
        assert!(generator.double_moves(&player, 1).is_empty());
        assert!(!generator.double_moves(&player, 2).is_empty());
    }

    #[test]
    fn test_double_moves_avoid_seekers_on_both_legs() {
        let setup = setup(
            TransportGraph::new()
                .with_edge(1, 2, Transport::Taxi)
                .with_edge(2, 3, Transport::Taxi)
                .with_edge(1, 4, Transport::Taxi)
                .with_edge(4, 5, Transport::Taxi),
        );
        let player = fugitive(1, TicketPurse::zeroed().with(Ticket::Taxi, 2).with(Ticket::Double, 1));
        let blocker_mid = Player::new(Piece::seeker(0), 2, TicketPurse::zeroed());
        let blocker_end = Player::new(Piece::seeker(1), 5, TicketPurse::zeroed());

        let moves = MoveGenerator::new(&setup, [&blocker_mid, &blocker_end]).double_moves(&player, 10);

        assert!(moves.iter().all(|m| m.midpoint == NodeId::new(4)));
        assert!(moves.iter().all(|m| m.destination == NodeId::new(1)));
        assert_eq!(moves.len(), 1);
    }
}
