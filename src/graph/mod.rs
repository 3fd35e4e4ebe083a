pub mod attribute;
pub mod attributed;
pub mod generators;
pub mod traits;

pub use attribute::AttributeValue;
pub use attributed::{AttributedGraph, EdgeId, NodeId};
pub use traits::{Element, GraphView};
