use log::{debug, trace};
use std::collections::{HashMap, HashSet};

use crate::algorithm::weight::{WeightConfig, WeightResolver};
use crate::data_structures::PriorityFrontier;
use crate::graph::GraphView;
use crate::{Error, Result};

/// Single-source shortest paths that remember every tying parent edge.
///
/// The relaxation loop runs to completion inside [`ShortestPathEngine::new`];
/// the returned engine is settled and only answers read-only queries, so it can
/// be shared between threads whenever the graph can. A new engine is needed per
/// source node and per graph snapshot.
///
/// Weight errors are reported for the first offending step met during
/// relaxation. That order follows frontier discovery order and the graph's edge
/// iteration order; which error wins when several edges are invalid is not
/// guaranteed.
#[derive(Debug)]
pub struct ShortestPathEngine<'g, G: GraphView> {
    pub(crate) graph: &'g G,
    pub(crate) source: G::Node,
    config: WeightConfig,

    /// Final distance of every settled node
    pub(crate) distances: HashMap<G::Node, f64>,

    /// Edge count of the canonical path to every settled node
    hop_lengths: HashMap<G::Node, usize>,

    /// Edges achieving each node's minimal distance, in discovery order
    pub(crate) parent_edges: HashMap<G::Node, Vec<G::Edge>>,

    /// Nodes in the order they left the frontier
    settle_order: Vec<G::Node>,
}

impl<'g, G: GraphView> ShortestPathEngine<'g, G> {
    /// Computes the shortest-path DAG rooted at `source`.
    ///
    /// Fails with [`Error::SourceNotFound`] if `source` is not in the graph, or
    /// with a weight error (negative, missing or non-numeric attribute) at the
    /// first offending step. No partial state is returned on failure.
    pub fn new(graph: &'g G, config: WeightConfig, source: G::Node) -> Result<Self> {
        if !graph.contains_node(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }

        let mut engine = ShortestPathEngine {
            graph,
            source,
            config,
            distances: HashMap::new(),
            hop_lengths: HashMap::new(),
            parent_edges: HashMap::new(),
            settle_order: Vec::new(),
        };
        engine.run()?;
        Ok(engine)
    }

    fn run(&mut self) -> Result<()> {
        let graph = self.graph;
        let resolver = WeightResolver::new(&self.config);
        let mut frontier: PriorityFrontier<G::Node, f64> = PriorityFrontier::new();
        let mut settled: HashSet<G::Node> = HashSet::new();

        debug!("Shortest paths from {:?} ({:?})", self.source, self.config);

        frontier.insert(self.source, 0.0);
        self.distances.insert(self.source, 0.0);
        self.hop_lengths.insert(self.source, 0);
        self.parent_edges.insert(self.source, Vec::new());

        while !frontier.is_empty() {
            let (u, _) = frontier.pop_min()?;
            settled.insert(u);
            self.settle_order.push(u);

            let dist_u = self.distances[&u];
            let hops_u = self.hop_lengths[&u];

            for edge in graph.outgoing_edges(u) {
                let v = graph.opposite(edge, u);
                if settled.contains(&v) {
                    continue;
                }

                let candidate = dist_u + resolver.weight(graph, edge, v)?;

                match self.distances.get(&v).copied() {
                    None => {
                        trace!("discovered {:?} at {} via {:?}", v, candidate, edge);
                        frontier.insert(v, candidate);
                        self.distances.insert(v, candidate);
                        self.hop_lengths.insert(v, hops_u + 1);
                        self.parent_edges.insert(v, vec![edge]);
                    }
                    Some(current) if candidate > current => {}
                    Some(current) if candidate == current => {
                        trace!("tie for {:?} at {} via {:?}", v, candidate, edge);
                        if let Some(parents) = self.parent_edges.get_mut(&v) {
                            parents.push(edge);
                        }
                    }
                    Some(_) => {
                        trace!("improved {:?} to {} via {:?}", v, candidate, edge);
                        self.distances.insert(v, candidate);
                        self.hop_lengths.insert(v, hops_u + 1);
                        self.parent_edges.insert(v, vec![edge]);
                        frontier.decrease_priority(v, candidate);
                    }
                }
            }
        }

        debug!("Settled {} nodes from {:?}", self.settle_order.len(), self.source);
        Ok(())
    }

    /// Source node of this run
    pub fn source(&self) -> G::Node {
        self.source
    }

    /// Weight configuration of this run
    pub fn config(&self) -> &WeightConfig {
        &self.config
    }

    /// Graph this run was computed on
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Returns true if `node` was settled, i.e. a path from the source exists
    pub fn is_reachable(&self, node: G::Node) -> bool {
        self.distances.contains_key(&node)
    }

    /// Settled nodes, in settlement order (source first)
    pub fn settled_nodes(&self) -> &[G::Node] {
        &self.settle_order
    }

    /// Length of the shortest path from the source to `node`
    pub fn distance_to(&self, node: G::Node) -> Result<f64> {
        self.distances
            .get(&node)
            .copied()
            .ok_or_else(|| unreachable::<G>(node))
    }

    /// Number of edges on the canonical shortest path to `node`
    pub fn hop_count_to(&self, node: G::Node) -> Result<usize> {
        self.hop_lengths
            .get(&node)
            .copied()
            .ok_or_else(|| unreachable::<G>(node))
    }

    /// Every edge achieving the minimal distance of `node`, in discovery order.
    ///
    /// Empty for the source.
    pub fn parent_edges(&self, node: G::Node) -> Result<&[G::Edge]> {
        self.parent_edges
            .get(&node)
            .map(Vec::as_slice)
            .ok_or_else(|| unreachable::<G>(node))
    }
}

pub(crate) fn unreachable<G: GraphView>(node: G::Node) -> Error {
    Error::Unreachable(format!("{:?}", node))
}
