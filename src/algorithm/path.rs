/// One step of a path: the edge taken and the node it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathStep<N, E> {
    pub node: N,
    pub edge: E,
}

/// A path starting at the engine's source, listed from source to target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortestPath<N, E> {
    source: N,
    steps: Vec<PathStep<N, E>>,
}

impl<N: Copy, E: Copy> ShortestPath<N, E> {
    /// Create a path from its source and the steps leaving it
    pub fn new(source: N, steps: Vec<PathStep<N, E>>) -> Self {
        ShortestPath { source, steps }
    }

    /// Create the empty path (source == target)
    pub fn empty(source: N) -> Self {
        ShortestPath {
            source,
            steps: Vec::new(),
        }
    }

    pub fn source(&self) -> N {
        self.source
    }

    /// Last node of the path; the source for an empty path
    pub fn target(&self) -> N {
        self.steps.last().map_or(self.source, |step| step.node)
    }

    pub fn steps(&self) -> &[PathStep<N, E>] {
        &self.steps
    }

    /// Edges in traversal order
    pub fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.steps.iter().map(|step| step.edge)
    }

    /// Nodes in traversal order, source included
    pub fn nodes(&self) -> Vec<N> {
        std::iter::once(self.source)
            .chain(self.steps.iter().map(|step| step.node))
            .collect()
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
