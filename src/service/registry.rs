// SPDX-License-Identifier: Apache-2.0

//! Builder registries keyed by component type.
//!
//! A registry decouples exporter-type-specific parsing logic from the
//! generic configuration-processing pipeline: exporter modules register a
//! builder for their type name at composition time, and the pipeline resolves
//! builders by name when it walks the configuration tree.
//!
//! Registries are explicit values owned by the composition root, not global
//! state. Registration takes `&mut self` and lookups take `&self`, so the
//! write-once-then-read-many discipline is enforced by the borrow checker:
//! once the root shares a registry (behind `&` or `Arc`), no further
//! registration can happen and all access is lock-free reads.

use crate::domain::{ComponentType, ConfigTree, ParserError, Result};
use crate::ports::{AuthzBuilder, AuthzParser, ComponentPortParser, PortBuilder};
use std::collections::HashMap;

/// A table mapping normalized component type names to parser builders.
///
/// The same table backs both registries; only the builder signature differs.
/// Use the [`PortRegistry`] and [`AuthzRegistry`] aliases, which add the
/// `parser_for` resolution step for their respective parser kind.
///
/// # Examples
///
/// ```
/// use expcfg::adapters::EndpointPortParser;
/// use expcfg::domain::ConfigTree;
/// use expcfg::service::PortRegistry;
///
/// let mut registry = PortRegistry::new();
/// registry.register("otlp", EndpointPortParser::builder());
///
/// let config = ConfigTree::from_yaml("endpoint: 0.0.0.0:4317").unwrap();
/// let parser = registry.parser_for("otlp/2", &config).unwrap();
/// assert_eq!(parser.ports()[0].port, 4317);
/// ```
#[derive(Clone)]
pub struct BuilderRegistry<B> {
    builders: HashMap<ComponentType, B>,
}

impl<B> Default for BuilderRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> BuilderRegistry<B> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        BuilderRegistry {
            builders: HashMap::new(),
        }
    }

    /// Registers a builder for the given component type name.
    ///
    /// The name is normalized first, and re-registration silently replaces
    /// the previous builder: last registration wins. That trade-off is only
    /// suitable for startup-time registration, which is the intended use.
    pub fn register(&mut self, type_name: &str, builder: B) {
        self.builders.insert(ComponentType::new(type_name), builder);
    }

    /// Returns the builder registered for the given type name, if any.
    ///
    /// The name is normalized before lookup, so `"otlp/2"` resolves the
    /// builder registered as `"otlp"`.
    pub fn builder_for(&self, type_name: &str) -> Option<&B> {
        self.builders.get(&ComponentType::new(type_name))
    }

    /// Checks whether a builder is registered for the given type name,
    /// without invoking it.
    pub fn is_registered(&self, type_name: &str) -> bool {
        self.builders.contains_key(&ComponentType::new(type_name))
    }

    /// Returns the number of registered builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Returns `true` when no builders are registered.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

/// Registry of [`ComponentPortParser`] builders.
pub type PortRegistry = BuilderRegistry<PortBuilder>;

/// Registry of [`AuthzParser`] builders.
pub type AuthzRegistry = BuilderRegistry<AuthzBuilder>;

impl BuilderRegistry<PortBuilder> {
    /// Resolves a builder for the given type name and invokes it with the
    /// exporter's configuration block.
    ///
    /// The only failure mode is [`ParserError::NoBuilderRegistered`];
    /// builders themselves are pure construction and never fail.
    pub fn parser_for(
        &self,
        type_name: &str,
        config: &ConfigTree,
    ) -> Result<Box<dyn ComponentPortParser>> {
        let builder = self
            .builder_for(type_name)
            .ok_or_else(|| ParserError::no_builder(ComponentType::new(type_name).into_string()))?;
        Ok(builder(type_name, config))
    }
}

impl BuilderRegistry<AuthzBuilder> {
    /// Resolves a builder for the given type name and invokes it with the
    /// exporter's configuration block.
    ///
    /// The only failure mode is [`ParserError::NoBuilderRegistered`];
    /// builders themselves are pure construction and never fail.
    pub fn parser_for(&self, type_name: &str, config: &ConfigTree) -> Result<Box<dyn AuthzParser>> {
        let builder = self
            .builder_for(type_name)
            .ok_or_else(|| ParserError::no_builder(ComponentType::new(type_name).into_string()))?;
        Ok(builder(type_name, config))
    }
}
