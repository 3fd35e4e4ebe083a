use crate::graph::attribute::AttributeValue;
use crate::graph::traits::{Element, GraphView};
use std::collections::HashMap;

/// Node identifier in an [`AttributedGraph`]
pub type NodeId = usize;

/// Edge identifier in an [`AttributedGraph`]
pub type EdgeId = usize;

/// Endpoints and orientation of one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeRecord {
    from: NodeId,
    to: NodeId,
    directed: bool,
}

/// An in-memory graph with mixed directed/undirected edges and named attributes
/// on both nodes and edges, using adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct AttributedGraph {
    /// Number of nodes in the graph
    node_count: usize,

    /// Every edge, indexed by its id
    edges: Vec<EdgeRecord>,

    /// Leaving edges for each node: node_id -> [edge_id]
    leaving_edges: HashMap<NodeId, Vec<EdgeId>>,

    node_attributes: HashMap<NodeId, HashMap<String, AttributeValue>>,
    edge_attributes: HashMap<EdgeId, HashMap<String, AttributeValue>>,
}

impl AttributedGraph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with the specified number of nodes and no edges
    pub fn with_nodes(nodes: usize) -> Self {
        let mut graph = AttributedGraph {
            node_count: nodes,
            leaving_edges: HashMap::with_capacity(nodes),
            ..Self::default()
        };

        for v in 0..nodes {
            graph.leaving_edges.insert(v, Vec::new());
        }

        graph
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the node exists in the graph
    pub fn has_node(&self, node: NodeId) -> bool {
        node < self.node_count
    }

    /// Adds a node to the graph and returns its ID
    pub fn add_node(&mut self) -> NodeId {
        let new_id = self.node_count;
        self.leaving_edges.insert(new_id, Vec::new());
        self.node_count += 1;
        new_id
    }

    /// Adds a directed edge `from -> to`; returns `None` if an endpoint is unknown
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.push_edge(from, to, true)
    }

    /// Adds an undirected edge between `a` and `b`; returns `None` if an endpoint is unknown
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.push_edge(a, b, false)
    }

    /// Adds an undirected edge carrying `value` under the attribute `name`
    pub fn add_weighted_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Option<EdgeId> {
        let edge = self.add_undirected_edge(a, b)?;
        self.set_edge_attribute(edge, name, value);
        Some(edge)
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, directed: bool) -> Option<EdgeId> {
        if !self.has_node(from) || !self.has_node(to) {
            return None;
        }

        let id = self.edges.len();
        self.edges.push(EdgeRecord { from, to, directed });

        self.leaving_edges.entry(from).or_default().push(id);
        // A self-loop is only listed once
        if !directed && from != to {
            self.leaving_edges.entry(to).or_default().push(id);
        }

        Some(id)
    }

    /// Returns the two endpoints of an edge, in insertion order
    pub fn endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge).map(|e| (e.from, e.to))
    }

    /// Returns true if the edge only goes from its first to its second endpoint
    pub fn is_directed(&self, edge: EdgeId) -> Option<bool> {
        self.edges.get(edge).map(|e| e.directed)
    }

    /// Sets a node attribute; returns false if the node does not exist
    pub fn set_node_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> bool {
        if !self.has_node(node) {
            return false;
        }
        self.node_attributes
            .entry(node)
            .or_default()
            .insert(name.to_string(), value.into());
        true
    }

    /// Sets an edge attribute; returns false if the edge does not exist
    pub fn set_edge_attribute(
        &mut self,
        edge: EdgeId,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> bool {
        if edge >= self.edges.len() {
            return false;
        }
        self.edge_attributes
            .entry(edge)
            .or_default()
            .insert(name.to_string(), value.into());
        true
    }

    /// Removes an attribute from a node or an edge, returning its previous value
    pub fn remove_attribute(
        &mut self,
        element: Element<NodeId, EdgeId>,
        name: &str,
    ) -> Option<AttributeValue> {
        match element {
            Element::Node(n) => self.node_attributes.get_mut(&n)?.remove(name),
            Element::Edge(e) => self.edge_attributes.get_mut(&e)?.remove(name),
        }
    }
}

impl GraphView for AttributedGraph {
    type Node = NodeId;
    type Edge = EdgeId;

    fn node_set(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(0..self.node_count)
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        if let Some(edges) = self.leaving_edges.get(&node) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn opposite(&self, edge: EdgeId, node: NodeId) -> NodeId {
        let record = self.edges[edge];
        if record.from == node {
            record.to
        } else {
            record.from
        }
    }

    fn attribute(&self, element: Element<NodeId, EdgeId>, name: &str) -> Option<AttributeValue> {
        let attributes = match element {
            Element::Node(n) => self.node_attributes.get(&n)?,
            Element::Edge(e) => self.edge_attributes.get(&e)?,
        };
        attributes.get(name).cloned()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.has_node(node)
    }
}
