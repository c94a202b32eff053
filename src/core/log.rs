//! Fugitive travel log.
//!
//! Append-only record of the fugitive's ticket usage, one entry per round.
//! The location is only recorded on reveal rounds. Backed by `im::Vector` so
//! appending to a shared log copies nothing but the path to the tail.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::graph::NodeId;
use super::ticket::Ticket;

/// One round of the fugitive's travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEntry {
    /// Ticket shown, location withheld.
    Hidden { ticket: Ticket },
    /// Ticket and location both shown.
    Revealed { ticket: Ticket, location: NodeId },
}

impl LogEntry {
    #[must_use]
    pub fn hidden(ticket: Ticket) -> Self {
        LogEntry::Hidden { ticket }
    }

    #[must_use]
    pub fn revealed(ticket: Ticket, location: impl Into<NodeId>) -> Self {
        LogEntry::Revealed {
            ticket,
            location: location.into(),
        }
    }

    #[must_use]
    pub fn ticket(&self) -> Ticket {
        match self {
            LogEntry::Hidden { ticket } | LogEntry::Revealed { ticket, .. } => *ticket,
        }
    }

    /// The revealed location, if any.
    #[must_use]
    pub fn location(&self) -> Option<NodeId> {
        match self {
            LogEntry::Hidden { .. } => None,
            LogEntry::Revealed { location, .. } => Some(*location),
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self, LogEntry::Revealed { .. })
    }
}

/// Ordered, append-only travel log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLog {
    entries: Vector<LogEntry>,
}

impl TravelLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rounds logged so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent revealed location, if the fugitive has surfaced yet.
    #[must_use]
    pub fn last_revealed(&self) -> Option<NodeId> {
        self.entries.iter().rev().find_map(LogEntry::location)
    }

    /// A new log with `entry` appended; `self` is unchanged.
    #[must_use]
    pub fn appended(&self, entry: LogEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push_back(entry);
        Self { entries }
    }
}

impl FromIterator<LogEntry> for TravelLog {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TravelLog {
    type Item = &'a LogEntry;
    type IntoIter = im::vector::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let hidden = LogEntry::hidden(Ticket::Bus);
        let revealed = LogEntry::revealed(Ticket::Secret, 7);

        assert_eq!(hidden.ticket(), Ticket::Bus);
        assert_eq!(hidden.location(), None);
        assert!(!hidden.is_revealed());

        assert_eq!(revealed.ticket(), Ticket::Secret);
        assert_eq!(revealed.location(), Some(NodeId::new(7)));
        assert!(revealed.is_revealed());
    }

    #[test]
    fn test_appended_leaves_original() {
        let log = TravelLog::new();
        let one = log.appended(LogEntry::hidden(Ticket::Taxi));
        let two = one.appended(LogEntry::revealed(Ticket::Bus, 4));

        assert!(log.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.get(1), Some(&LogEntry::revealed(Ticket::Bus, 4)));
    }

    #[test]
    fn test_last_revealed() {
        let log: TravelLog = [
            LogEntry::revealed(Ticket::Taxi, 3),
            LogEntry::hidden(Ticket::Bus),
            LogEntry::revealed(Ticket::Taxi, 8),
            LogEntry::hidden(Ticket::Secret),
        ]
        .into_iter()
        .collect();

        assert_eq!(log.last_revealed(), Some(NodeId::new(8)));
        assert_eq!(TravelLog::new().last_revealed(), None);
    }
}
