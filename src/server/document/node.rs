//! Tree representation of a guild configuration document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single node of a configuration document.
///
/// Objects are merged key by key against the defaults; scalars and arrays are leaves that
/// replace the default at the same path. Serializes to and from plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ConfigNode {
    /// Leaf value: null, boolean, number or string (enumerated choices are strings).
    Scalar(Scalar),
    /// Ordered sequence such as a list of filter rules. Always replaced as a whole.
    Array(Vec<ConfigNode>),
    /// Named section mapping setting names to nested nodes.
    Object(BTreeMap<String, ConfigNode>),
}

/// Leaf value of a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Explicitly unset value, e.g. an unbound logging channel.
    Null,
    /// Enabled flag.
    Bool(bool),
    /// Numeric threshold.
    Number(Number),
    /// Identifier, free text or enumerated choice.
    String(String),
}

impl ConfigNode {
    /// Creates an object node with no keys.
    pub fn empty_object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Creates a null scalar node.
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, ConfigNode>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ConfigNode]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Scalar(Scalar::Number(value)) => value.as_u64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Name of the node's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "a boolean",
            Self::Scalar(Scalar::Number(_)) => "a number",
            Self::Scalar(Scalar::String(_)) => "a string",
            Self::Array(_) => "an array",
            Self::Object(_) => "an object",
        }
    }

    /// Returns the child node stored under `key` if this node is an object.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Follows a path of object keys from this node.
    ///
    /// # Arguments
    /// - `path` - Keys to descend through, outermost first
    ///
    /// # Returns
    /// - `Some(&ConfigNode)` - Node found at the end of the path
    /// - `None` - A key is missing or an intermediate node is not an object
    pub fn get_path(&self, path: &[&str]) -> Option<&ConfigNode> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Sets `key` to `value`, returning the previous child if there was one.
    ///
    /// A non-object node is first replaced by an empty object.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigNode) -> Option<ConfigNode> {
        if !self.is_object() {
            *self = Self::empty_object();
        }

        match self {
            Self::Object(map) => map.insert(key.into(), value),
            _ => None,
        }
    }

    /// Collects every key path that leads to a leaf (scalar or array) or to an empty object.
    ///
    /// Paths are joined with `.`. Used to check that one document covers the shape of another.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, String::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(node: &ConfigNode, prefix: String, paths: &mut Vec<String>) {
    match node {
        ConfigNode::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaf_paths(child, path, paths);
            }
        }
        _ => paths.push(prefix),
    }
}

impl Default for ConfigNode {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl From<Value> for ConfigNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(value) => Self::Scalar(Scalar::Bool(value)),
            Value::Number(value) => Self::Scalar(Scalar::Number(value)),
            Value::String(value) => Self::Scalar(Scalar::String(value)),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<ConfigNode> for Value {
    fn from(node: ConfigNode) -> Self {
        match node {
            ConfigNode::Scalar(Scalar::Null) => Value::Null,
            ConfigNode::Scalar(Scalar::Bool(value)) => Value::Bool(value),
            ConfigNode::Scalar(Scalar::Number(value)) => Value::Number(value),
            ConfigNode::Scalar(Scalar::String(value)) => Value::String(value),
            ConfigNode::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ConfigNode::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, node)| (key, Value::from(node)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
