//! Game state snapshots.
//!
//! ## GameState
//!
//! One immutable snapshot of a game in progress:
//! - Setup (shared by every snapshot of the same game)
//! - Fugitive and seekers
//! - Travel log
//! - Pieces still owed a move this round
//! - Cached legal moves and outcome
//!
//! The round index is never stored: it is the travel log's length.
//!
//! Collections are `im` persistent structures, so `advance` and `clone` copy
//! only what changes and a retained snapshot can seed any number of
//! alternative continuations.

use std::sync::Arc;

use im::{OrdSet, Vector};

use super::action::Move;
use super::config::GameSetup;
use super::error::EngineError;
use super::graph::NodeId;
use super::log::{LogEntry, TravelLog};
use super::piece::{Piece, SeekerId};
use super::player::Player;
use super::ticket::{Ticket, TicketBoard};
use crate::rules::engine::{detect_victory, Board, Victory};
use crate::rules::moves::MoveGenerator;

/// Rounds that must remain before the fugitive is offered double moves.
///
/// Applied on top of the generator's own `DOUBLE_MOVE_MIN_ROUNDS` gate.
pub const DOUBLE_MOVE_GATE_ROUNDS: usize = 3;

/// Immutable game snapshot.
///
/// ## Example
///
/// ```
/// use pursuit_engine::core::{GameSetup, GameState, Move, Piece, Player, Ticket, TicketPurse, Transport, TransportGraph};
/// use pursuit_engine::rules::Board;
///
/// let graph = TransportGraph::new()
///     .with_edge(1, 2, Transport::Taxi)
///     .with_edge(2, 3, Transport::Bus);
/// let setup = GameSetup::new(graph, vec![true]).unwrap();
///
/// let fugitive = Player::new(Piece::Fugitive, 1, TicketPurse::zeroed().with(Ticket::Taxi, 1));
/// let seeker = Player::new(Piece::seeker(0), 3, TicketPurse::zeroed().with(Ticket::Bus, 1));
///
/// let state = GameState::new(setup, fugitive, [seeker]).unwrap();
/// let hop = Move::single(Piece::Fugitive, 1, Ticket::Taxi, 2);
/// assert!(state.available_moves().contains(&hop));
///
/// let next = state.advance(&hop).unwrap();
/// assert_eq!(next.travel_log().len(), 1);
/// assert_eq!(state.travel_log().len(), 0); // untouched
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    setup: Arc<GameSetup>,
    remaining: OrdSet<Piece>,
    log: TravelLog,
    fugitive: Player,
    seekers: Vector<Player>,
    moves: OrdSet<Move>,
    victory: Option<Victory>,
}

impl GameState {
    /// Create the opening state: the fugitive is first to move and the log
    /// is empty.
    ///
    /// Fails when the setup is empty, a piece is supplied in the wrong role
    /// or twice, a player stands off the board, a seeker holds a `Secret` or
    /// `Double` ticket, or two seekers share a node.
    pub fn new(
        setup: impl Into<Arc<GameSetup>>,
        fugitive: Player,
        seekers: impl IntoIterator<Item = Player>,
    ) -> Result<Self, EngineError> {
        let setup = setup.into();
        let seekers: Vector<Player> = seekers.into_iter().collect();
        validate(&setup, &fugitive, &seekers)?;

        log::debug!(
            "new game: {} seekers, {} rounds, {} nodes",
            seekers.len(),
            setup.round_count(),
            setup.graph().node_count()
        );

        Ok(Self::assemble(
            setup,
            OrdSet::unit(Piece::Fugitive),
            TravelLog::new(),
            fugitive,
            seekers,
        ))
    }

    /// Build a snapshot from already-validated parts, computing its legal
    /// moves and outcome.
    fn assemble(
        setup: Arc<GameSetup>,
        remaining: OrdSet<Piece>,
        log: TravelLog,
        fugitive: Player,
        seekers: Vector<Player>,
    ) -> Self {
        let generator = MoveGenerator::new(&setup, seekers.iter());

        // Close the seeker sub-round once nobody left in it can act.
        let mut remaining = remaining;
        if remaining.is_empty() {
            remaining = OrdSet::unit(Piece::Fugitive);
        }
        let mut moves = legal_moves(&setup, &generator, log.len(), &fugitive, &seekers, &remaining);
        if !remaining.contains(&Piece::Fugitive) && moves.is_empty() {
            log::debug!("no remaining seeker can move; round closes");
            remaining = OrdSet::unit(Piece::Fugitive);
            moves = legal_moves(&setup, &generator, log.len(), &fugitive, &seekers, &remaining);
        }

        let victory = detect_victory(&setup, &generator, &fugitive, &seekers, log.len(), &remaining, &moves);
        if let Some(victory) = victory {
            log::info!("game over after {} rounds: {:?}", log.len(), victory);
            moves = OrdSet::new();
        }

        Self {
            setup,
            remaining,
            log,
            fugitive,
            seekers,
            moves,
            victory,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Every piece in the game.
    #[must_use]
    pub fn players(&self) -> OrdSet<Piece> {
        self.seekers
            .iter()
            .map(Player::piece)
            .chain(std::iter::once(Piece::Fugitive))
            .collect()
    }

    /// Pieces still owed a move this round.
    #[must_use]
    pub fn remaining(&self) -> &OrdSet<Piece> {
        &self.remaining
    }

    #[must_use]
    pub fn fugitive(&self) -> &Player {
        &self.fugitive
    }

    /// Seekers in the order they were supplied.
    pub fn seekers(&self) -> impl Iterator<Item = &Player> {
        self.seekers.iter()
    }

    /// The full player value for `piece`.
    #[must_use]
    pub fn player(&self, piece: Piece) -> Option<&Player> {
        match piece {
            Piece::Fugitive => Some(&self.fugitive),
            Piece::Seeker(_) => self.seekers.iter().find(|p| p.piece() == piece),
        }
    }

    /// Rounds completed so far (0-based index of the next round).
    #[must_use]
    pub fn round(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> usize {
        self.setup.rounds_remaining(self.log.len())
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn victory(&self) -> Option<Victory> {
        self.victory
    }

    // === Transition Helpers ===

    /// Log entries for the legs of a fugitive move, each judged against the
    /// schedule at its own round index.
    fn log_after(&self, mv: &Move) -> TravelLog {
        mv.legs()
            .into_iter()
            .enumerate()
            .fold(self.log.clone(), |log, (offset, (ticket, destination))| {
                let round = self.log.len() + offset;
                let entry = if self.setup.is_reveal_round(round) {
                    LogEntry::revealed(ticket, destination)
                } else {
                    LogEntry::hidden(ticket)
                };
                log.appended(entry)
            })
    }
}

impl Board for GameState {
    fn available_moves(&self) -> &OrdSet<Move> {
        &self.moves
    }

    fn player_tickets(&self, piece: Piece) -> Option<TicketBoard<'_>> {
        self.player(piece).map(|p| TicketBoard::new(p.tickets()))
    }

    fn seeker_location(&self, seeker: SeekerId) -> Option<NodeId> {
        self.player(Piece::Seeker(seeker)).map(Player::location)
    }

    fn travel_log(&self) -> &TravelLog {
        &self.log
    }

    fn winner(&self) -> OrdSet<Piece> {
        match self.victory {
            Some(victory) => self.players().into_iter().filter(|&p| victory.is_winner(p)).collect(),
            None => OrdSet::new(),
        }
    }

    fn is_game_over(&self) -> bool {
        self.victory.is_some()
    }

    fn advance(&self, mv: &Move) -> Result<Self, EngineError> {
        if !self.moves.contains(mv) {
            return Err(EngineError::IllegalMove(*mv));
        }

        let mover = mv.mover();
        let destination = mv.destination();
        let tickets = mv.tickets();
        log::debug!("round {}: {}", self.round() + 1, mv);

        let (fugitive, seekers, log, remaining): (Player, Vector<Player>, TravelLog, OrdSet<Piece>) = match mover {
            Piece::Fugitive => (
                self.fugitive.spend(&tickets).at(destination),
                self.seekers.clone(),
                self.log_after(mv),
                self.seekers.iter().map(Player::piece).collect(),
            ),
            Piece::Seeker(_) => {
                let index = self
                    .seekers
                    .iter()
                    .position(|p| p.piece() == mover)
                    .ok_or(EngineError::IllegalMove(*mv))?;
                let seeker = self.seekers[index].spend(&tickets).at(destination);
                (
                    self.fugitive.receive(&tickets),
                    self.seekers.update(index, seeker),
                    self.log.clone(),
                    self.remaining.without(&mover),
                )
            }
        };

        Ok(Self::assemble(self.setup.clone(), remaining, log, fugitive, seekers))
    }
}

/// Legal moves for every piece in `remaining`.
fn legal_moves(
    setup: &GameSetup,
    generator: &MoveGenerator<'_>,
    rounds_logged: usize,
    fugitive: &Player,
    seekers: &Vector<Player>,
    remaining: &OrdSet<Piece>,
) -> OrdSet<Move> {
    let rounds_remaining = setup.rounds_remaining(rounds_logged);
    let mut moves = OrdSet::new();

    for &piece in remaining {
        let player = match piece {
            Piece::Fugitive => fugitive,
            Piece::Seeker(_) => match seekers.iter().find(|p| p.piece() == piece) {
                Some(player) => player,
                None => continue,
            },
        };

        moves.extend(generator.single_moves(player).into_iter().map(Move::Single));

        if player.is_fugitive() && player.has(Ticket::Double) && rounds_remaining >= DOUBLE_MOVE_GATE_ROUNDS {
            moves.extend(
                generator
                    .double_moves(player, rounds_remaining)
                    .into_iter()
                    .map(Move::Double),
            );
        }
    }

    moves
}

/// Construction-time invariants.
fn validate(setup: &GameSetup, fugitive: &Player, seekers: &Vector<Player>) -> Result<(), EngineError> {
    if setup.rounds().is_empty() {
        return Err(EngineError::EmptyRounds);
    }
    if setup.graph().is_empty() {
        return Err(EngineError::EmptyGraph);
    }
    if !fugitive.is_fugitive() {
        return Err(EngineError::MisplacedPiece(fugitive.piece()));
    }

    let graph = setup.graph();
    let on_board = |player: &Player| {
        if graph.contains(player.location()) {
            Ok(())
        } else {
            Err(EngineError::UnknownNode {
                piece: player.piece(),
                node: player.location(),
            })
        }
    };
    on_board(fugitive)?;

    for (i, seeker) in seekers.iter().enumerate() {
        let id = seeker
            .piece()
            .as_seeker()
            .ok_or(EngineError::MisplacedPiece(seeker.piece()))?;
        on_board(seeker)?;

        if let Some(&ticket) = Ticket::FUGITIVE_ONLY.iter().find(|&&t| seeker.has(t)) {
            return Err(EngineError::FugitiveTicketHeld { seeker: id, ticket });
        }

        for other in seekers.iter().skip(i + 1) {
            if other.piece() == seeker.piece() {
                return Err(EngineError::DuplicatePiece(seeker.piece()));
            }
            if other.location() == seeker.location() {
                return Err(EngineError::SharedLocation {
                    first: id,
                    second: other.piece().as_seeker().ok_or(EngineError::MisplacedPiece(other.piece()))?,
                    location: seeker.location(),
                });
            }
        }
    }

    Ok(())
}
