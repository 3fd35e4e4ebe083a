use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::attribute::AttributeValue;

/// An element of a graph that may carry attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element<N, E> {
    Node(N),
    Edge(E),
}

/// Read-only view of an attributed graph, as consumed by the shortest-path engine.
///
/// The view must stay unchanged while an engine runs over it. Iteration order of
/// `outgoing_edges` drives discovery order, so it should be stable for a given
/// snapshot if reproducible results are wanted.
pub trait GraphView {
    /// Node handle
    type Node: Copy + Eq + Hash + Debug;

    /// Edge handle
    type Edge: Copy + Eq + Hash + Debug;

    /// Returns an iterator over every node of the graph
    fn node_set(&self) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Returns the edges that can be traversed when leaving `node`.
    ///
    /// Undirected edges are leaving edges for both of their endpoints.
    fn outgoing_edges(&self, node: Self::Node) -> Box<dyn Iterator<Item = Self::Edge> + '_>;

    /// Returns the endpoint of `edge` that is not `node`
    fn opposite(&self, edge: Self::Edge, node: Self::Node) -> Self::Node;

    /// Reads a named attribute from a node or an edge
    fn attribute(&self, element: Element<Self::Node, Self::Edge>, name: &str)
        -> Option<AttributeValue>;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: Self::Node) -> bool {
        self.node_set().any(|n| n == node)
    }
}
