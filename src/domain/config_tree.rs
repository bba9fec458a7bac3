// SPDX-License-Identifier: Apache-2.0

//! Loosely-typed configuration value tree.
//!
//! This module provides `ConfigTree`, the representation of a decoded
//! collector configuration block. Exporter configuration carries no static
//! schema at this boundary: any key may be absent or hold a value of an
//! unexpected shape, so every accessor is explicit about failure instead of
//! panicking.

use crate::domain::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A decoded, schema-free configuration value.
///
/// `ConfigTree` is a tagged union over the value shapes a YAML configuration
/// document can produce. Accessors return `Option` so callers handle
/// unexpected shapes with the same none-or-value idiom used everywhere else
/// in this crate.
///
/// # Examples
///
/// ```
/// use expcfg::domain::ConfigTree;
///
/// let config = ConfigTree::from_yaml("endpoint: 0.0.0.0:4317").unwrap();
/// assert_eq!(config.get("endpoint").and_then(|v| v.as_str()), Some("0.0.0.0:4317"));
/// assert!(config.get("tls").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigTree {
    /// An explicit null value.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence of values.
    Sequence(Vec<ConfigTree>),
    /// A mapping from string keys to values. Non-string keys in the source
    /// document are rendered to their string form during conversion.
    Mapping(BTreeMap<String, ConfigTree>),
}

impl ConfigTree {
    /// Parses a YAML document into a `ConfigTree`.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        Ok(Self::from(value))
    }

    /// Looks up a key in a mapping.
    ///
    /// Returns `None` when the key is absent or when `self` is not a mapping.
    pub fn get(&self, key: &str) -> Option<&ConfigTree> {
        match self {
            ConfigTree::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigTree::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer scalar.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigTree::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigTree::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the underlying map, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, ConfigTree>> {
        match self {
            ConfigTree::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the underlying slice, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigTree]> {
        match self {
            ConfigTree::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns `true` for an explicit null value.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigTree::Null)
    }

    /// Returns a short name for the value's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigTree::Null => "null",
            ConfigTree::Bool(_) => "boolean",
            ConfigTree::Integer(_) => "integer",
            ConfigTree::Float(_) => "float",
            ConfigTree::String(_) => "string",
            ConfigTree::Sequence(_) => "sequence",
            ConfigTree::Mapping(_) => "mapping",
        }
    }
}

impl From<serde_yaml::Value> for ConfigTree {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => ConfigTree::Null,
            serde_yaml::Value::Bool(b) => ConfigTree::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigTree::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    ConfigTree::Float(f)
                } else {
                    ConfigTree::Null
                }
            }
            serde_yaml::Value::String(s) => ConfigTree::String(s),
            serde_yaml::Value::Sequence(seq) => {
                ConfigTree::Sequence(seq.into_iter().map(ConfigTree::from).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut result = BTreeMap::new();
                for (key, val) in map {
                    let key = match key {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        serde_yaml::Value::Number(n) => n.to_string(),
                        // Composite keys are rare enough to flatten to a
                        // debug rendering rather than reject the document.
                        other => format!("{:?}", other),
                    };
                    result.insert(key, ConfigTree::from(val));
                }
                ConfigTree::Mapping(result)
            }
            serde_yaml::Value::Tagged(tagged) => ConfigTree::from(tagged.value),
        }
    }
}

impl From<&str> for ConfigTree {
    fn from(s: &str) -> Self {
        ConfigTree::String(s.to_string())
    }
}

impl From<String> for ConfigTree {
    fn from(s: String) -> Self {
        ConfigTree::String(s)
    }
}

impl From<i64> for ConfigTree {
    fn from(i: i64) -> Self {
        ConfigTree::Integer(i)
    }
}
