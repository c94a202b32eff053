//! Piece identification.
//!
//! ## Piece
//!
//! Every player controls exactly one piece: the single fugitive, or one of
//! the seekers. Pieces are plain `Copy` values and are totally ordered so
//! sets of pieces iterate deterministically (fugitive first, then seekers
//! by id).
//!
//! ## SeekerId
//!
//! Type-safe seeker identifier supporting up to 255 seekers.

use serde::{Deserialize, Serialize};

/// Seeker identifier.
///
/// Seeker indices are 0-based: the first seeker is `SeekerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeekerId(pub u8);

impl SeekerId {
    /// Create a new seeker ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seeker index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the first `count` seeker IDs.
    ///
    /// ```
    /// use pursuit_engine::core::SeekerId;
    ///
    /// let seekers: Vec<_> = SeekerId::all(3).collect();
    /// assert_eq!(seekers, vec![SeekerId::new(0), SeekerId::new(1), SeekerId::new(2)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = SeekerId> {
        (0..count.min(u8::MAX as usize + 1)).map(|i| SeekerId(i as u8))
    }
}

impl std::fmt::Display for SeekerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seeker {}", self.0)
    }
}

/// Identity of a piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// The hidden player.
    Fugitive,
    /// One of the fully visible pursuers.
    Seeker(SeekerId),
}

impl Piece {
    /// Shorthand for `Piece::Seeker(SeekerId::new(id))`.
    #[must_use]
    pub const fn seeker(id: u8) -> Self {
        Piece::Seeker(SeekerId::new(id))
    }

    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Piece::Fugitive)
    }

    #[must_use]
    pub const fn is_seeker(self) -> bool {
        matches!(self, Piece::Seeker(_))
    }

    /// The seeker id, if this piece is a seeker.
    #[must_use]
    pub const fn as_seeker(self) -> Option<SeekerId> {
        match self {
            Piece::Seeker(id) => Some(id),
            Piece::Fugitive => None,
        }
    }
}

impl From<SeekerId> for Piece {
    fn from(id: SeekerId) -> Self {
        Piece::Seeker(id)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Fugitive => write!(f, "Fugitive"),
            Piece::Seeker(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeker_id_basics() {
        let s0 = SeekerId::new(0);
        let s1 = SeekerId::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s1), "Seeker 1");
    }

    #[test]
    fn test_piece_kind() {
        assert!(Piece::Fugitive.is_fugitive());
        assert!(!Piece::Fugitive.is_seeker());
        assert!(Piece::seeker(2).is_seeker());
        assert_eq!(Piece::seeker(2).as_seeker(), Some(SeekerId::new(2)));
        assert_eq!(Piece::Fugitive.as_seeker(), None);
    }

    #[test]
    fn test_piece_ordering() {
        let mut pieces = vec![Piece::seeker(2), Piece::Fugitive, Piece::seeker(0)];
        pieces.sort();

        assert_eq!(pieces, vec![Piece::Fugitive, Piece::seeker(0), Piece::seeker(2)]);
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::seeker(3);
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
