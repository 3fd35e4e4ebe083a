use serde::{Deserialize, Serialize};

use crate::graph::{Element, GraphView};
use crate::{Error, Result};

/// Which element carries the cost of a traversal step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// The traversed edge
    #[default]
    Edge,
    /// The node reached by the step
    #[serde(alias = "node")]
    OppositeNode,
}

/// How the cost of a traversal step is derived from graph attributes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Attribute holding the cost; `None` makes every step cost 1
    pub attribute: Option<String>,
    /// Element the attribute is read from
    pub element: ElementKind,
}

impl WeightConfig {
    /// Every step costs 1 (breadth-first distances)
    pub fn unweighted() -> Self {
        WeightConfig::default()
    }

    /// Read the cost from the named attribute of the traversed edge
    pub fn edge_attribute(name: impl Into<String>) -> Self {
        WeightConfig {
            attribute: Some(name.into()),
            element: ElementKind::Edge,
        }
    }

    /// Read the cost from the named attribute of the node reached by the step
    pub fn node_attribute(name: impl Into<String>) -> Self {
        WeightConfig {
            attribute: Some(name.into()),
            element: ElementKind::OppositeNode,
        }
    }

    /// Returns true if no attribute is configured
    pub fn is_unweighted(&self) -> bool {
        self.attribute.is_none()
    }
}

/// Resolves the non-negative cost of one traversal step
#[derive(Debug, Clone, Copy)]
pub struct WeightResolver<'a> {
    config: &'a WeightConfig,
}

impl<'a> WeightResolver<'a> {
    pub fn new(config: &'a WeightConfig) -> Self {
        WeightResolver { config }
    }

    /// Cost of traversing `edge` to reach `reached`.
    pub fn weight<G: GraphView>(&self, graph: &G, edge: G::Edge, reached: G::Node) -> Result<f64> {
        let attribute = match &self.config.attribute {
            None => return Ok(1.0),
            Some(name) => name,
        };

        let element = match self.config.element {
            ElementKind::Edge => Element::Edge(edge),
            ElementKind::OppositeNode => Element::Node(reached),
        };

        let value = graph
            .attribute(element, attribute)
            .ok_or_else(|| Error::MissingAttribute {
                attribute: attribute.clone(),
                element: describe::<G>(element),
            })?;

        let weight = value.as_number().ok_or_else(|| Error::InvalidAttributeType {
            attribute: attribute.clone(),
            element: describe::<G>(element),
            found: format!("{} {}", value.kind_name(), value),
        })?;

        if weight < 0.0 {
            return Err(Error::NegativeWeight {
                attribute: attribute.clone(),
                element: describe::<G>(element),
                value: weight,
            });
        }

        Ok(weight)
    }
}

fn describe<G: GraphView>(element: Element<G::Node, G::Edge>) -> String {
    match element {
        Element::Node(n) => format!("node {:?}", n),
        Element::Edge(e) => format!("edge {:?}", e),
    }
}
