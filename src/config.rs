//! Named-parameter processing.
//!
//! A caller declares the parameters it accepts as [`ParameterDefinition`]s and
//! feeds the supplied [`Parameter`]s through a [`ParameterProcessor`]. Checks,
//! validators and transforms all run once, before any algorithm is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithm::{ElementKind, WeightConfig};
use crate::graph::AttributeValue;
use crate::{Error, Result};

/// Parameter values share the attribute value model
pub type ParameterValue = AttributeValue;

/// A named parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,
    pub value: ParameterValue,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        Parameter {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Expected kind of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Text,
    Number,
    Bool,
}

impl ParameterKind {
    fn accepts(self, value: &ParameterValue) -> bool {
        match self {
            ParameterKind::Text => matches!(value, AttributeValue::Text(_)),
            ParameterKind::Number => value.as_number().is_some(),
            ParameterKind::Bool => matches!(value, AttributeValue::Bool(_)),
        }
    }
}

/// Caller-supplied check, run after the built-in ones
pub type Validator = fn(&ParameterValue) -> std::result::Result<(), String>;

/// Caller-supplied rewrite of an accepted value
pub type Transform = fn(ParameterValue) -> ParameterValue;

/// Declaration of one accepted parameter
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    name: String,
    optional: bool,
    kind: Option<ParameterKind>,
    min: Option<f64>,
    max: Option<f64>,
    allowed: Vec<String>,
    validator: Option<Validator>,
    transform: Option<Transform>,
}

impl ParameterDefinition {
    /// A parameter that must be supplied
    pub fn required(name: impl Into<String>) -> Self {
        ParameterDefinition {
            name: name.into(),
            optional: false,
            kind: None,
            min: None,
            max: None,
            allowed: Vec::new(),
            validator: None,
            transform: None,
        }
    }

    /// A parameter that may be omitted
    pub fn optional(name: impl Into<String>) -> Self {
        ParameterDefinition {
            optional: true,
            ..Self::required(name)
        }
    }

    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Numeric range, bounds included. Implies a numeric value.
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Restrict a text value to a fixed set of alternatives
    pub fn with_allowed<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = allowed.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &ParameterValue) -> Result<()> {
        if let Some(kind) = self.kind {
            if !kind.accepts(value) {
                return Err(Error::InvalidParameter(format!(
                    "invalid type for \"{}\", {:?} expected, got {}",
                    self.name,
                    kind,
                    value.kind_name()
                )));
            }
        }

        if self.min.is_some() || self.max.is_some() {
            let n = value.as_number().ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "min or max defined but value is not a number for \"{}\"",
                    self.name
                ))
            })?;
            if let Some(min) = self.min.filter(|&min| n < min) {
                return Err(Error::InvalidParameter(format!(
                    "bad value for \"{}\", {} < {}",
                    self.name, n, min
                )));
            }
            if let Some(max) = self.max.filter(|&max| n > max) {
                return Err(Error::InvalidParameter(format!(
                    "bad value for \"{}\", {} > {}",
                    self.name, n, max
                )));
            }
        }

        if !self.allowed.is_empty() {
            let s = value.as_text().ok_or_else(|| {
                Error::InvalidParameter(format!("value of \"{}\" should be text", self.name))
            })?;
            if !self.allowed.iter().any(|alt| alt == s) {
                return Err(Error::InvalidParameter(format!(
                    "\"{}\" is not in the allowed values for \"{}\"",
                    s, self.name
                )));
            }
        }

        if let Some(validator) = self.validator {
            validator(value)
                .map_err(|msg| Error::InvalidParameter(format!("\"{}\": {}", self.name, msg)))?;
        }

        Ok(())
    }
}

/// Parameters that passed processing, by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedParameters {
    values: HashMap<String, ParameterValue>,
}

impl ProcessedParameters {
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_text)
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttributeValue::as_number)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Checks supplied parameters against a set of definitions
#[derive(Debug, Clone, Default)]
pub struct ParameterProcessor {
    definitions: Vec<ParameterDefinition>,
}

impl ParameterProcessor {
    pub fn new(definitions: Vec<ParameterDefinition>) -> Self {
        ParameterProcessor { definitions }
    }

    pub fn define(mut self, definition: ParameterDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Process parameters.
    ///
    /// Fails with [`Error::MissingParameter`] when a required parameter is
    /// absent, and with [`Error::InvalidParameter`] when some parameters are
    /// unknown (all of them are listed) or a value is rejected. When a key is
    /// supplied twice the last value wins.
    pub fn process(&self, params: &[Parameter]) -> Result<ProcessedParameters> {
        for definition in &self.definitions {
            if !definition.optional && !params.iter().any(|p| p.key == definition.name) {
                return Err(Error::MissingParameter(format!("\"{}\"", definition.name)));
            }
        }

        let mut unknown: Vec<&str> = Vec::new();
        for param in params {
            if self.definition(&param.key).is_none() && !unknown.contains(&param.key.as_str()) {
                unknown.push(&param.key);
            }
        }
        if !unknown.is_empty() {
            let names: Vec<String> = unknown.iter().map(|k| format!("\"{}\"", k)).collect();
            return Err(Error::InvalidParameter(format!(
                "some parameters do not exist: {}",
                names.join(", ")
            )));
        }

        let mut values = HashMap::new();
        for param in params {
            if let Some(definition) = self.definition(&param.key) {
                definition.check(&param.value)?;
                let value = match definition.transform {
                    Some(transform) => transform(param.value.clone()),
                    None => param.value.clone(),
                };
                values.insert(param.key.clone(), value);
            }
        }

        Ok(ProcessedParameters { values })
    }

    fn definition(&self, name: &str) -> Option<&ParameterDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }
}

fn non_empty(value: &ParameterValue) -> std::result::Result<(), String> {
    match value.as_text() {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err("attribute name must not be empty".to_string()),
    }
}

fn lowercase(value: ParameterValue) -> ParameterValue {
    match value {
        AttributeValue::Text(s) => AttributeValue::Text(s.trim().to_ascii_lowercase()),
        other => other,
    }
}

fn element_name(value: &ParameterValue) -> std::result::Result<(), String> {
    let name = value.as_text().map(|s| s.trim().to_ascii_lowercase());
    match name.as_deref() {
        Some("edge") | Some("node") | Some("opposite_node") => Ok(()),
        _ => Err("expected one of \"edge\", \"node\", \"opposite_node\"".to_string()),
    }
}

impl WeightConfig {
    /// The processor accepting `attribute` and `element`
    pub fn parameter_processor() -> ParameterProcessor {
        ParameterProcessor::new(vec![
            ParameterDefinition::optional("attribute")
                .with_kind(ParameterKind::Text)
                .with_validator(non_empty),
            ParameterDefinition::optional("element")
                .with_kind(ParameterKind::Text)
                .with_validator(element_name)
                .with_transform(lowercase),
        ])
    }

    /// Builds a configuration from named parameters.
    ///
    /// `attribute` names the cost attribute (omit it for unit costs), `element`
    /// is `"edge"` (default) or `"node"`/`"opposite_node"`.
    pub fn from_parameters(params: &[Parameter]) -> Result<Self> {
        let processed = Self::parameter_processor().process(params)?;

        let element = match processed.get_text("element") {
            Some("node") | Some("opposite_node") => ElementKind::OppositeNode,
            _ => ElementKind::Edge,
        };

        Ok(WeightConfig {
            attribute: processed.get_text("attribute").map(str::to_string),
            element,
        })
    }

    /// Builds a configuration from a JSON object such as
    /// `{"attribute": "length", "element": "edge"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WeightConfig = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("weight configuration: {}", e)))?;
        if let Some(name) = &config.attribute {
            non_empty(&AttributeValue::Text(name.clone())).map_err(Error::InvalidParameter)?;
        }
        Ok(config)
    }
}
