use tied_sssp::graph::generators::generate_grid;
use tied_sssp::{AttributedGraph, Error, GraphView, ShortestPathEngine, WeightConfig};

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;

// A-B=2, B-C=2, A-C=5
fn triangle() -> (AttributedGraph, [usize; 3]) {
    let mut graph = AttributedGraph::with_nodes(3);
    let ab = graph.add_weighted_edge(A, B, "weight", 2.0).unwrap();
    let bc = graph.add_weighted_edge(B, C, "weight", 2.0).unwrap();
    let ac = graph.add_weighted_edge(A, C, "weight", 5.0).unwrap();
    (graph, [ab, bc, ac])
}

// A-B, A-C, B-D, C-D all of weight 1
fn diamond() -> (AttributedGraph, [usize; 4]) {
    let mut graph = AttributedGraph::with_nodes(4);
    let ab = graph.add_weighted_edge(A, B, "weight", 1.0).unwrap();
    let ac = graph.add_weighted_edge(A, C, "weight", 1.0).unwrap();
    let bd = graph.add_weighted_edge(B, D, "weight", 1.0).unwrap();
    let cd = graph.add_weighted_edge(C, D, "weight", 1.0).unwrap();
    (graph, [ab, ac, bd, cd])
}

#[test]
fn test_triangle_distances() {
    let (graph, [ab, bc, _]) = triangle();
    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap();

    assert_eq!(engine.distance_to(A).unwrap(), 0.0);
    assert_eq!(engine.distance_to(B).unwrap(), 2.0);
    assert_eq!(engine.distance_to(C).unwrap(), 4.0);
    assert_eq!(engine.hop_count_to(C).unwrap(), 2);
    assert_eq!(engine.parent_edges(C).unwrap(), &[bc]);
    assert_eq!(engine.parent_edges(B).unwrap(), &[ab]);
    assert!(engine.parent_edges(A).unwrap().is_empty());
}

#[test]
fn test_diamond_records_both_parents() {
    let (graph, [_, _, bd, cd]) = diamond();
    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap();

    assert_eq!(engine.distance_to(D).unwrap(), 2.0);
    assert_eq!(engine.hop_count_to(D).unwrap(), 2);
    assert_eq!(engine.parent_edges(D).unwrap(), &[bd, cd]);
}

#[test]
fn test_improvement_replaces_parents() {
    // 0 -> 1 costs 10 directly, 4 through 2 and 3
    let mut graph = AttributedGraph::with_nodes(4);
    let direct = graph.add_weighted_edge(0, 1, "w", 10.0).unwrap();
    graph.add_weighted_edge(0, 2, "w", 1.0).unwrap();
    graph.add_weighted_edge(2, 3, "w", 1.0).unwrap();
    let last = graph.add_weighted_edge(3, 1, "w", 2.0).unwrap();

    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("w"), 0).unwrap();
    assert_eq!(engine.distance_to(1).unwrap(), 4.0);
    assert_eq!(engine.hop_count_to(1).unwrap(), 3);
    assert_eq!(engine.parent_edges(1).unwrap(), &[last]);
    assert!(!engine.parent_edges(1).unwrap().contains(&direct));
}

#[test]
fn test_unweighted_is_breadth_first() {
    let graph = generate_grid(6, 4, None, 0.0);
    let engine = ShortestPathEngine::new(&graph, WeightConfig::unweighted(), 0).unwrap();

    for v in graph.node_set() {
        let (x, y) = (v % 6, v / 6);
        assert_eq!(engine.distance_to(v).unwrap(), (x + y) as f64);
        assert_eq!(engine.hop_count_to(v).unwrap() as f64, engine.distance_to(v).unwrap());
    }
}

#[test]
fn test_directed_edges_are_one_way() {
    let mut graph = AttributedGraph::with_nodes(3);
    graph.add_directed_edge(0, 1).unwrap();
    graph.add_directed_edge(2, 1).unwrap();

    let engine = ShortestPathEngine::new(&graph, WeightConfig::unweighted(), 0).unwrap();
    assert_eq!(engine.distance_to(1).unwrap(), 1.0);
    assert!(!engine.is_reachable(2));

    let reverse = ShortestPathEngine::new(&graph, WeightConfig::unweighted(), 1).unwrap();
    assert_eq!(reverse.settled_nodes(), &[1]);
}

#[test]
fn test_opposite_node_weights() {
    // Costs live on nodes: entering 1 costs 5, entering 2 costs 1, entering 3 costs 1
    let mut graph = AttributedGraph::with_nodes(4);
    graph.add_undirected_edge(0, 1).unwrap();
    graph.add_undirected_edge(0, 2).unwrap();
    graph.add_undirected_edge(1, 3).unwrap();
    graph.add_undirected_edge(2, 3).unwrap();
    for (node, cost) in [(0, 0.0), (1, 5.0), (2, 1.0), (3, 1.0)] {
        graph.set_node_attribute(node, "cost", cost);
    }

    let engine = ShortestPathEngine::new(&graph, WeightConfig::node_attribute("cost"), 0).unwrap();
    assert_eq!(engine.distance_to(2).unwrap(), 1.0);
    assert_eq!(engine.distance_to(3).unwrap(), 2.0);
    // Entering 1 costs 5 whichever neighbour it is reached from
    assert_eq!(engine.distance_to(1).unwrap(), 5.0);
}

#[test]
fn test_integer_attributes_are_numeric() {
    let mut graph = AttributedGraph::with_nodes(2);
    graph.add_weighted_edge(0, 1, "w", 7i64).unwrap();
    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("w"), 0).unwrap();
    assert_eq!(engine.distance_to(1).unwrap(), 7.0);
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = AttributedGraph::with_nodes(3);
    let a = graph.add_weighted_edge(0, 1, "w", 0.0).unwrap();
    let b = graph.add_weighted_edge(1, 2, "w", 0.0).unwrap();
    let c = graph.add_weighted_edge(0, 2, "w", 0.0).unwrap();

    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("w"), 0).unwrap();
    assert_eq!(engine.distance_to(2).unwrap(), 0.0);
    assert_eq!(engine.hop_count_to(2).unwrap(), 1);
    assert_eq!(engine.parent_edges(2).unwrap(), &[c, b]);
    assert_eq!(engine.parent_edges(1).unwrap(), &[a]);
}

#[test]
fn test_disconnected_node_is_unreachable() {
    let (mut graph, _) = triangle();
    let island = graph.add_node();
    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap();

    assert!(matches!(engine.distance_to(island), Err(Error::Unreachable(_))));
    assert!(matches!(engine.hop_count_to(island), Err(Error::Unreachable(_))));
    assert!(matches!(engine.parent_edges(island), Err(Error::Unreachable(_))));
    assert!(!engine.settled_nodes().contains(&island));
}

#[test]
fn test_source_must_exist() {
    let (graph, _) = triangle();
    let result = ShortestPathEngine::new(&graph, WeightConfig::unweighted(), 42);
    assert!(matches!(result, Err(Error::SourceNotFound(_))));
}

#[test]
fn test_negative_weight_aborts() {
    let (mut graph, [_, bc, _]) = triangle();
    graph.set_edge_attribute(bc, "weight", -1.0);

    let err = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap_err();
    match err {
        Error::NegativeWeight { attribute, element, value } => {
            assert_eq!(attribute, "weight");
            assert_eq!(element, format!("edge {:?}", bc));
            assert_eq!(value, -1.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_attribute_aborts() {
    let (mut graph, [ab, _, _]) = triangle();
    graph.remove_attribute(tied_sssp::Element::Edge(ab), "weight");

    let err = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap_err();
    assert_eq!(
        err,
        Error::MissingAttribute {
            attribute: "weight".to_string(),
            element: format!("edge {:?}", ab),
        }
    );
}

#[test]
fn test_non_numeric_attribute_aborts() {
    let (mut graph, [ab, _, _]) = triangle();
    graph.set_edge_attribute(ab, "weight", "far");
    let err = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap_err();
    assert!(matches!(err, Error::InvalidAttributeType { .. }));

    graph.set_edge_attribute(ab, "weight", f64::NAN);
    let err = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap_err();
    assert!(matches!(err, Error::InvalidAttributeType { .. }));
}

#[test]
fn test_missing_node_attribute_names_the_node() {
    let mut graph = AttributedGraph::with_nodes(2);
    graph.add_undirected_edge(0, 1).unwrap();
    let err = ShortestPathEngine::new(&graph, WeightConfig::node_attribute("cost"), 0).unwrap_err();
    assert_eq!(
        err,
        Error::MissingAttribute {
            attribute: "cost".to_string(),
            element: "node 1".to_string(),
        }
    );
}

#[test]
fn test_self_loop_is_ignored() {
    let mut graph = AttributedGraph::with_nodes(2);
    graph.add_weighted_edge(0, 0, "w", -3.0).unwrap();
    graph.add_weighted_edge(0, 1, "w", 1.0).unwrap();

    // The loop leads back to a settled node, so its weight is never read
    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("w"), 0).unwrap();
    assert_eq!(engine.distance_to(1).unwrap(), 1.0);
}

#[test]
fn test_settlement_order_is_non_decreasing() {
    let (graph, _) = triangle();
    let engine = ShortestPathEngine::new(&graph, WeightConfig::edge_attribute("weight"), A).unwrap();
    assert_eq!(engine.source(), A);
    assert_eq!(engine.settled_nodes(), &[A, B, C]);

    let distances: Vec<f64> = engine
        .settled_nodes()
        .iter()
        .map(|&v| engine.distance_to(v).unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}
