//! Path reconstruction over the shortest-path DAG of a settled engine.
//!
//! Parent edges always lead from a node settled earlier to one settled later,
//! so walking them backwards from any settled node ends at the source.

use log::warn;
use std::collections::{HashMap, HashSet};

use crate::algorithm::engine::{unreachable, ShortestPathEngine};
use crate::algorithm::path::{PathStep, ShortestPath};
use crate::graph::GraphView;
use crate::Result;

/// Above this many paths, enumerating them is logged as a warning
const LARGE_ENUMERATION: u64 = 1 << 20;

impl<'g, G: GraphView> ShortestPathEngine<'g, G> {
    /// The canonical shortest path to `node`: at every step back towards the
    /// source the first-recorded parent edge is taken.
    ///
    /// Empty when `node` is the source.
    pub fn canonical_path(&self, node: G::Node) -> Result<ShortestPath<G::Node, G::Edge>> {
        if !self.is_reachable(node) {
            return Err(unreachable::<G>(node));
        }

        let mut steps = Vec::new();
        let mut current = node;
        while current != self.source {
            let edge = match self.parent_edges.get(&current).and_then(|p| p.first()) {
                Some(&edge) => edge,
                None => return Err(unreachable::<G>(current)),
            };
            steps.push(PathStep {
                node: current,
                edge,
            });
            current = self.graph.opposite(edge, current);
        }
        steps.reverse();

        Ok(ShortestPath::new(self.source, steps))
    }

    /// Every edge lying on at least one shortest path from the source to `node`.
    ///
    /// Each node of the DAG is visited at most once. Edges come out in
    /// depth-first order from `node`, following parent edges in discovery order.
    pub fn all_shortest_path_edges(&self, node: G::Node) -> Result<Vec<G::Edge>> {
        if !self.is_reachable(node) {
            return Err(unreachable::<G>(node));
        }

        let mut edges = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![node];
        visited.insert(node);

        while let Some(current) = stack.pop() {
            let parents = match self.parent_edges.get(&current) {
                Some(parents) => parents,
                None => continue,
            };
            for &edge in parents.iter().rev() {
                edges.push(edge);
                let parent = self.graph.opposite(edge, current);
                if visited.insert(parent) {
                    stack.push(parent);
                }
            }
        }

        Ok(edges)
    }

    /// Alias of [`all_shortest_path_edges`](Self::all_shortest_path_edges)
    #[deprecated(note = "use all_shortest_path_edges")]
    pub fn edge_set_to(&self, node: G::Node) -> Result<Vec<G::Edge>> {
        self.all_shortest_path_edges(node)
    }

    /// Number of distinct shortest paths from the source to `node`, saturating
    /// at `u64::MAX`. One for the source itself.
    ///
    /// Runs in O(V + E) over the settled nodes, without enumerating anything.
    pub fn shortest_path_count(&self, node: G::Node) -> Result<u64> {
        if !self.is_reachable(node) {
            return Err(unreachable::<G>(node));
        }

        let mut counts: HashMap<G::Node, u64> = HashMap::new();
        for &current in self.settled_nodes() {
            let count = if current == self.source {
                1
            } else {
                self.parent_edges[&current]
                    .iter()
                    .map(|&edge| {
                        let parent = self.graph.opposite(edge, current);
                        counts.get(&parent).copied().unwrap_or(0)
                    })
                    .fold(0u64, u64::saturating_add)
            };
            if current == node {
                return Ok(count);
            }
            counts.insert(current, count);
        }

        Err(unreachable::<G>(node))
    }

    /// Lazily enumerates every distinct shortest path from the source to `node`.
    ///
    /// The first path yielded is the canonical one. The number of paths can grow
    /// exponentially with the number of ties; check
    /// [`shortest_path_count`](Self::shortest_path_count) first when that matters.
    pub fn all_shortest_paths(&self, node: G::Node) -> Result<AllShortestPaths<'_, 'g, G>> {
        let count = self.shortest_path_count(node)?;
        if count > LARGE_ENUMERATION {
            warn!(
                "Enumerating {} shortest paths from {:?} to {:?}",
                count, self.source, node
            );
        }

        Ok(AllShortestPaths {
            engine: self,
            frames: vec![Frame {
                node,
                next_parent: 0,
            }],
            edges: Vec::new(),
        })
    }
}

/// Depth-first position in the parent DAG
#[derive(Debug, Clone, Copy)]
struct Frame<N> {
    node: N,
    next_parent: usize,
}

/// Iterator over every shortest path to one node; see
/// [`ShortestPathEngine::all_shortest_paths`].
///
/// Walks the parent DAG backwards with an explicit stack, so its memory stays
/// proportional to the longest path rather than to the number of paths.
#[derive(Debug)]
pub struct AllShortestPaths<'e, 'g, G: GraphView> {
    engine: &'e ShortestPathEngine<'g, G>,

    /// Nodes from the target back towards the source
    frames: Vec<Frame<G::Node>>,

    /// `edges[i]` joins `frames[i]` to `frames[i + 1]`
    edges: Vec<G::Edge>,
}

impl<'e, 'g, G: GraphView> AllShortestPaths<'e, 'g, G> {
    fn current_path(&self) -> ShortestPath<G::Node, G::Edge> {
        let steps = self
            .edges
            .iter()
            .zip(self.frames.iter())
            .rev()
            .map(|(&edge, frame)| PathStep {
                node: frame.node,
                edge,
            })
            .collect();
        ShortestPath::new(self.engine.source, steps)
    }

    fn backtrack(&mut self) {
        self.frames.pop();
        self.edges.pop();
    }
}

impl<'e, 'g, G: GraphView> Iterator for AllShortestPaths<'e, 'g, G> {
    type Item = ShortestPath<G::Node, G::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.frames.len().checked_sub(1)?;
            let frame = self.frames[top];

            if frame.node == self.engine.source {
                let path = self.current_path();
                self.backtrack();
                return Some(path);
            }

            let parents = self
                .engine
                .parent_edges
                .get(&frame.node)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            match parents.get(frame.next_parent) {
                Some(&edge) => {
                    self.frames[top].next_parent += 1;
                    let parent = self.engine.graph.opposite(edge, frame.node);
                    self.edges.push(edge);
                    self.frames.push(Frame {
                        node: parent,
                        next_parent: 0,
                    });
                }
                None => self.backtrack(),
            }
        }
    }
}

impl<'e, 'g, G: GraphView> std::iter::FusedIterator for AllShortestPaths<'e, 'g, G> {}
