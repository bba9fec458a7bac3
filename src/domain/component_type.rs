// SPDX-License-Identifier: Apache-2.0

//! Normalized exporter component type names.
//!
//! This module provides the `ComponentType` newtype, the key under which
//! parser builders are registered and looked up. Collector configurations may
//! qualify a component with an instance suffix (`"otlp/2"`); all instances of
//! the same kind share one builder, so the qualifier is stripped on
//! construction.

use std::fmt;

/// A normalized exporter component type name.
///
/// Construction strips any `/`-qualified instance suffix, so `"otlp"` and
/// `"otlp/2"` produce the same key. Registration and lookup both go through
/// this type, which is what keeps registered builders reachable for every
/// instance of a component kind.
///
/// # Examples
///
/// ```
/// use expcfg::domain::ComponentType;
///
/// assert_eq!(ComponentType::new("otlp").as_str(), "otlp");
/// assert_eq!(ComponentType::new("otlp/2").as_str(), "otlp");
/// assert_eq!(ComponentType::new("otlp"), ComponentType::new("otlp/east"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComponentType(String);

impl ComponentType {
    /// Creates a normalized component type from a raw type name.
    pub fn new(name: &str) -> Self {
        let base = match name.split_once('/') {
            Some((base, _)) => base,
            None => name,
        };
        ComponentType(base.to_string())
    }

    /// Returns the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ComponentType` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for ComponentType {
    fn from(s: &str) -> Self {
        ComponentType::new(s)
    }
}

impl AsRef<str> for ComponentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_unqualified_name_is_unchanged() {
        let ty = ComponentType::new("jaeger");
        assert_eq!(ty.as_str(), "jaeger");
    }

    #[test]
    fn test_qualifier_is_stripped() {
        let ty = ComponentType::new("otlp/2");
        assert_eq!(ty.as_str(), "otlp");
    }

    #[test]
    fn test_only_first_segment_survives() {
        let ty = ComponentType::new("otlp/a/b");
        assert_eq!(ty.as_str(), "otlp");
    }

    #[test]
    fn test_empty_name() {
        let ty = ComponentType::new("");
        assert_eq!(ty.as_str(), "");
    }

    #[test]
    fn test_bare_slash() {
        let ty = ComponentType::new("/2");
        assert_eq!(ty.as_str(), "");
    }

    #[test]
    fn test_qualified_and_unqualified_collide_as_map_keys() {
        let mut map = HashMap::new();
        map.insert(ComponentType::new("otlp"), 1);
        map.insert(ComponentType::new("otlp/2"), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&ComponentType::new("otlp/3")], 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ComponentType::new("zipkin/aux")), "zipkin");
    }

    #[test]
    fn test_into_string() {
        assert_eq!(ComponentType::new("prometheus/1").into_string(), "prometheus");
    }
}
