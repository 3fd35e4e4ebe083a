pub mod engine;
pub mod path;
pub mod reconstruct;
pub mod weight;

pub use engine::ShortestPathEngine;
pub use path::{PathStep, ShortestPath};
pub use reconstruct::AllShortestPaths;
pub use weight::{ElementKind, WeightConfig, WeightResolver};
