//! Game setup.
//!
//! The static configuration a game is played on: the transport graph and
//! the round schedule. Supplied once by whoever loads the board, validated
//! on construction and never mutated afterwards.
//!
//! The schedule holds one flag per round; `true` marks a reveal round, in
//! which the fugitive's destination is written to the travel log.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::graph::TransportGraph;

/// Static configuration: board graph plus round schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    graph: TransportGraph,
    rounds: Vec<bool>,
}

impl GameSetup {
    /// The classic 24-round schedule, revealing on rounds 3, 8, 13, 18 and 24.
    pub const STANDARD_ROUNDS: [bool; 24] = [
        false, false, true, false, false, false, false, true, false, false, false, false,
        true, false, false, false, false, true, false, false, false, false, false, true,
    ];

    /// Create a setup, rejecting an empty graph or an empty schedule.
    pub fn new(graph: TransportGraph, rounds: impl Into<Vec<bool>>) -> Result<Self, EngineError> {
        let rounds = rounds.into();
        if rounds.is_empty() {
            return Err(EngineError::EmptyRounds);
        }
        if graph.is_empty() {
            return Err(EngineError::EmptyGraph);
        }
        Ok(Self { graph, rounds })
    }

    /// Create a setup on the standard 24-round schedule.
    pub fn standard(graph: TransportGraph) -> Result<Self, EngineError> {
        Self::new(graph, Self::STANDARD_ROUNDS)
    }

    #[must_use]
    pub fn graph(&self) -> &TransportGraph {
        &self.graph
    }

    #[must_use]
    pub fn rounds(&self) -> &[bool] {
        &self.rounds
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the round at `index` (0-based) reveals the fugitive.
    ///
    /// Indices past the end of the schedule never reveal.
    #[must_use]
    pub fn is_reveal_round(&self, index: usize) -> bool {
        self.rounds.get(index).copied().unwrap_or(false)
    }

    /// Rounds left once `completed` rounds have been logged.
    #[must_use]
    pub fn rounds_remaining(&self, completed: usize) -> usize {
        self.rounds.len().saturating_sub(completed)
    }
}
