//! Tied SSSP - tie-aware single-source shortest paths
//!
//! This library runs a Dijkstra relaxation over an attributed graph and keeps,
//! for every settled node, *all* parent edges that achieve its minimal distance.
//! From that shortest-path DAG it can rebuild a canonical path, the edge set of
//! every shortest path, or enumerate each distinct shortest path.
//!
//! Edge costs come from a named numeric attribute, read either on the edge or on
//! the node reached by the step. Without an attribute every step costs 1 and the
//! engine degenerates to breadth-first search. Negative costs are rejected.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    AllShortestPaths, ElementKind, PathStep, ShortestPath, ShortestPathEngine, WeightConfig,
    WeightResolver,
};
pub use config::{Parameter, ParameterDefinition, ParameterProcessor};
pub use data_structures::PriorityFrontier;
/// Re-export main types for convenient use
pub use graph::{AttributeValue, AttributedGraph, Element, GraphView};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Attribute \"{attribute}\" has a negative value {value} on {element}")]
    NegativeWeight {
        attribute: String,
        element: String,
        value: f64,
    },

    #[error("Attribute \"{attribute}\" is missing on {element}")]
    MissingAttribute { attribute: String, element: String },

    #[error("Attribute \"{attribute}\" on {element} is not numeric: {found}")]
    InvalidAttributeType {
        attribute: String,
        element: String,
        found: String,
    },

    #[error("Pop from an empty frontier")]
    EmptyFrontier,

    #[error("Node {0} is not reachable from the source")]
    Unreachable(String),

    #[error("Source node {0} not found in graph")]
    SourceNotFound(String),

    #[error("Parameter {0} is missing")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
