//! Transport graph.
//!
//! Undirected graph of board locations. Each edge carries the set of
//! transports that run along it. Adjacency is stored per node so neighbour
//! and edge-label lookups during move generation stay cheap.
//!
//! ## Usage
//!
//! ```
//! use pursuit_engine::core::{NodeId, Transport, TransportGraph};
//!
//! let graph = TransportGraph::new()
//!     .with_edge(1, 2, Transport::Taxi)
//!     .with_edge(1, 2, Transport::Bus)
//!     .with_edge(2, 3, Transport::Underground);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(
//!     graph.transports(NodeId::new(2), NodeId::new(1)),
//!     &[Transport::Taxi, Transport::Bus]
//! );
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ticket::Transport;

/// A location on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Transports labelling one edge. Almost every edge carries one or two.
pub type EdgeLabel = SmallVec<[Transport; 2]>;

/// One outgoing edge in the adjacency list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Neighbour {
    node: NodeId,
    transports: EdgeLabel,
}

/// Undirected multi-transport graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportGraph {
    adjacency: FxHashMap<NodeId, Vec<Neighbour>>,
    edge_count: usize,
}

impl TransportGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated node.
    #[must_use]
    pub fn with_node(mut self, node: impl Into<NodeId>) -> Self {
        self.add_node(node);
        self
    }

    /// Add an edge (or another transport on an existing edge).
    #[must_use]
    pub fn with_edge(mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, transport: Transport) -> Self {
        self.add_edge(a, b, transport);
        self
    }

    pub fn add_node(&mut self, node: impl Into<NodeId>) {
        self.adjacency.entry(node.into()).or_default();
    }

    /// Add `transport` to the edge between `a` and `b`, creating both nodes
    /// and the edge as needed. Adding a transport twice is a no-op.
    pub fn add_edge(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, transport: Transport) {
        let (a, b) = (a.into(), b.into());
        let created = self.link(a, b, transport);
        if a != b {
            self.link(b, a, transport);
        }
        if created {
            self.edge_count += 1;
        }
    }

    /// Returns true if a new edge was created.
    fn link(&mut self, from: NodeId, to: NodeId, transport: Transport) -> bool {
        let neighbours = self.adjacency.entry(from).or_default();
        match neighbours.iter_mut().find(|n| n.node == to) {
            Some(existing) => {
                if !existing.transports.contains(&transport) {
                    existing.transports.push(transport);
                }
                false
            }
            None => {
                neighbours.push(Neighbour {
                    node: to,
                    transports: SmallVec::from_slice(&[transport]),
                });
                true
            }
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0 || self.edge_count == 0
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterate over all nodes (unordered).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterate over the neighbours of `node` with the transports linking them.
    ///
    /// Unknown nodes have no neighbours.
    pub fn adjacent(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &[Transport])> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flatten()
            .map(|n| (n.node, n.transports.as_slice()))
    }

    /// Transports on the edge between `a` and `b`; empty if there is no edge.
    #[must_use]
    pub fn transports(&self, a: NodeId, b: NodeId) -> &[Transport] {
        self.adjacency
            .get(&a)
            .and_then(|ns| ns.iter().find(|n| n.node == b))
            .map(|n| n.transports.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        !self.transports(a, b).is_empty()
    }
}
