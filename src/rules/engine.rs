//! Board trait and terminal-condition detection.
//!
//! `Board` is the narrow surface orchestration, UI and AI callers use:
//! - What moves are legal
//! - How a move produces the next state
//! - Who has won
//!
//! ## Terminal conditions
//!
//! Checked in this order; the first that holds decides the game:
//! 1. `Capture`: a seeker stands on the fugitive's node. Seekers win.
//! 2. `Escape`: the fugitive is due to move but every round has been logged.
//!    Fugitive wins.
//! 3. `Stranded`: no seeker has a legal move from where it stands. Fugitive
//!    wins.
//! 4. `Cornered`: the fugitive is due to move and has no legal move. Seekers
//!    win.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::moves::MoveGenerator;
use crate::core::{
    EngineError, GameSetup, Move, NodeId, Piece, Player, SeekerId, TicketBoard, TravelLog,
};

/// Which side a finished game went to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Fugitive,
    Seekers,
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Victory {
    /// A seeker moved onto the fugitive.
    Capture,
    /// The round schedule ran out with the fugitive still free.
    Escape,
    /// No seeker can move any more.
    Stranded,
    /// The fugitive has no legal move on its turn.
    Cornered,
}

impl Victory {
    #[must_use]
    pub fn winning_side(self) -> Side {
        match self {
            Victory::Capture | Victory::Cornered => Side::Seekers,
            Victory::Escape | Victory::Stranded => Side::Fugitive,
        }
    }

    /// Check if a piece is on the winning side.
    #[must_use]
    pub fn is_winner(self, piece: Piece) -> bool {
        match self.winning_side() {
            Side::Fugitive => piece.is_fugitive(),
            Side::Seekers => piece.is_seeker(),
        }
    }
}

/// Query and transition surface of a game snapshot.
///
/// Implementations are immutable: `advance` returns a new board and leaves
/// `self` usable for exploring other continuations.
pub trait Board: Sized {
    /// Every move the pieces still owed a move this round may make.
    ///
    /// Empty once the game is over.
    fn available_moves(&self) -> &OrdSet<Move>;

    /// Ticket view for `piece`, or `None` if the piece is not in the game.
    fn player_tickets(&self, piece: Piece) -> Option<TicketBoard<'_>>;

    /// Where `seeker` stands, or `None` if it is not in the game.
    fn seeker_location(&self, seeker: SeekerId) -> Option<NodeId>;

    /// The fugitive's travel log so far.
    fn travel_log(&self) -> &TravelLog;

    /// The winning pieces; empty while the game continues.
    ///
    /// Also empty when the game is over but the winning side has no pieces
    /// (seekers cornering the fugitive in a game without seekers), so use
    /// `is_game_over` to test for the end of the game.
    fn winner(&self) -> OrdSet<Piece>;

    /// Whether the game has ended. Once true, `available_moves()` is empty.
    fn is_game_over(&self) -> bool;

    /// Play `mv`, which must be one of `available_moves()`.
    fn advance(&self, mv: &Move) -> Result<Self, EngineError>;

    // === Convenience Methods ===

    /// Legal moves for one piece.
    fn moves_for(&self, piece: Piece) -> Vec<Move> {
        self.available_moves()
            .iter()
            .filter(|m| m.mover() == piece)
            .copied()
            .collect()
    }
}

/// Decide whether the board is terminal.
///
/// `legal` is the legal-move set already computed for `remaining`.
pub(crate) fn detect_victory(
    setup: &GameSetup,
    generator: &MoveGenerator<'_>,
    fugitive: &Player,
    seekers: &Vector<Player>,
    rounds_logged: usize,
    remaining: &OrdSet<Piece>,
    legal: &OrdSet<Move>,
) -> Option<Victory> {
    let fugitive_to_move = remaining.contains(&Piece::Fugitive);

    if seekers.iter().any(|s| s.location() == fugitive.location()) {
        Some(Victory::Capture)
    } else if fugitive_to_move && rounds_logged >= setup.round_count() {
        Some(Victory::Escape)
    } else if !seekers.is_empty() && seekers.iter().all(|s| generator.single_moves(s).is_empty()) {
        Some(Victory::Stranded)
    } else if fugitive_to_move && legal.is_empty() {
        Some(Victory::Cornered)
    } else {
        None
    }
}
