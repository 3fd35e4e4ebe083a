use crate::graph::{AttributedGraph, NodeId};
use rand::prelude::*;

/// Generates an undirected `width x height` grid (4-connectivity).
///
/// When `attribute` is given every edge carries it with the value `weight`.
pub fn generate_grid(
    width: usize,
    height: usize,
    attribute: Option<&str>,
    weight: f64,
) -> AttributedGraph {
    let mut graph = AttributedGraph::with_nodes(width * height);

    let get_index = |x: usize, y: usize| -> NodeId { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            let mut neighbors = Vec::with_capacity(2);
            if x + 1 < width {
                neighbors.push(get_index(x + 1, y));
            }
            if y + 1 < height {
                neighbors.push(get_index(x, y + 1));
            }

            for neighbor in neighbors {
                if let Some(edge) = graph.add_undirected_edge(current, neighbor) {
                    if let Some(name) = attribute {
                        graph.set_edge_attribute(edge, name, weight);
                    }
                }
            }
        }
    }

    graph
}

/// Generates a random directed graph with about `edge_factor * n` edges.
///
/// Weights are small integers in `1..=max_weight` stored as floats under
/// `attribute`, so equal-cost paths are common.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    attribute: &str,
    max_weight: u32,
    rng: &mut R,
) -> AttributedGraph {
    let mut graph = AttributedGraph::with_nodes(n);
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = f64::from(rng.gen_range(1..=max_weight.max(1)));
        if let Some(edge) = graph.add_directed_edge(u, v) {
            graph.set_edge_attribute(edge, attribute, weight);
        }
    }

    graph
}

/// Generates `diamonds` unit-weight diamonds chained one after another.
///
/// Every diamond offers two equal routes, so the last node is reached by
/// `2^diamonds` distinct shortest paths. Returns the graph and the last node.
pub fn generate_diamond_chain(diamonds: usize, attribute: &str) -> (AttributedGraph, NodeId) {
    let mut graph = AttributedGraph::new();
    let mut tail = graph.add_node();

    for _ in 0..diamonds {
        let upper = graph.add_node();
        let lower = graph.add_node();
        let head = graph.add_node();
        for (a, b) in [(tail, upper), (tail, lower), (upper, head), (lower, head)] {
            graph.add_weighted_edge(a, b, attribute, 1.0);
        }
        tail = head;
    }

    (graph, tail)
}
