use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tied_sssp::graph::generators::{generate_grid, generate_random};
use tied_sssp::{AttributedGraph, ShortestPathEngine, WeightConfig};

// Runs one engine and reports what it settled
fn benchmark_engine(
    name: &str,
    graph: &AttributedGraph,
    config: &WeightConfig,
    source: usize,
) -> Duration {
    println!(
        "Running {} on graph with {} nodes / {} edges...",
        name,
        graph.node_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let engine = match ShortestPathEngine::new(graph, config.clone(), source) {
        Ok(engine) => engine,
        Err(e) => {
            println!("  - Failed: {}", e);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    let reachable = engine.settled_nodes().len();
    let tied = engine
        .settled_nodes()
        .iter()
        .filter(|&&v| engine.parent_edges(v).map_or(false, |p| p.len() > 1))
        .count();
    println!(
        "  - Settled {} nodes ({} with tied parents) in {:?}",
        reachable, tied, duration
    );

    duration
}

fn main() {
    env_logger::init();

    let sizes = vec![10_000, 50_000, 100_000];
    let mut rng = StdRng::seed_from_u64(42);
    let weighted = WeightConfig::edge_attribute("weight");

    for &n in &sizes {
        let side = (n as f64).sqrt() as usize;
        let grid = generate_grid(side, side, Some("weight"), 1.0);
        benchmark_engine("unit grid", &grid, &weighted, 0);
        benchmark_engine("unweighted grid", &grid, &WeightConfig::unweighted(), 0);

        let random = generate_random(n, 4.0, "weight", 10, &mut rng);
        benchmark_engine("random graph", &random, &weighted, 0);
    }

    // One engine per source, run in parallel over a shared graph
    let side = 100;
    let grid = generate_grid(side, side, Some("weight"), 1.0);
    let sources: Vec<usize> = (0..grid.node_count()).step_by(side * 10 + 1).collect();
    let start = Instant::now();
    let farthest: Vec<f64> = sources
        .par_iter()
        .filter_map(|&s| ShortestPathEngine::new(&grid, weighted.clone(), s).ok())
        .map(|engine| {
            engine
                .settled_nodes()
                .last()
                .and_then(|&v| engine.distance_to(v).ok())
                .unwrap_or(0.0)
        })
        .collect();
    info!("Parallel runs: {:?}", farthest);
    println!(
        "Ran {} sources in parallel in {:?}",
        sources.len(),
        start.elapsed()
    );

    let corner = grid.node_count() - 1;
    if let Ok(engine) = ShortestPathEngine::new(&grid, weighted.clone(), 0) {
        if let Ok(count) = engine.shortest_path_count(corner) {
            println!("Corner-to-corner shortest paths on {0}x{0} grid: {1}", side, count);
        }
    }
}
