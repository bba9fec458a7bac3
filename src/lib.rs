// SPDX-License-Identifier: Apache-2.0

//! A pluggable parser registry for telemetry exporter configuration.
//!
//! This crate extracts network-exposure information (service ports) and
//! access-control requirements (RBAC rules) from loosely-typed exporter
//! configuration blocks, keyed by exporter component type name. It is the
//! piece a telemetry-pipeline operator uses to discover, for each configured
//! exporter, which port(s) it will expose and which authorization rules it
//! implies, given only the exporter's opaque configuration payload.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ComponentType`, `ConfigTree`,
//!   `ServicePortDescriptor`, `DynamicRolePolicy`, errors)
//! - **Ports**: Trait definitions (`ComponentPortParser`, `AuthzParser`,
//!   `PortNamer`) and the builder signatures
//! - **Adapters**: Stock implementations (`EndpointPortParser`,
//!   `DefaultPortNamer`)
//! - **Service**: The builder registries and endpoint/port extraction
//!
//! # Design
//!
//! - **Explicit registries**: registries are values owned by the composition
//!   root, not global state, so tests can construct isolated registries.
//!   Registration takes `&mut self`; sharing the registry seals it.
//! - **Graceful degradation**: a missing endpoint is benign, and a malformed
//!   one is logged and skipped. Only a missing builder surfaces as an error;
//!   one broken exporter block never aborts configuration processing.
//! - **Structured logging** via [`tracing`], for observability only, never
//!   control flow.
//!
//! # Quick Start
//!
//! ```rust
//! use expcfg::prelude::*;
//!
//! # fn main() -> expcfg::domain::Result<()> {
//! let mut registry = PortRegistry::new();
//! registry.register("otlp", EndpointPortParser::builder());
//!
//! let config = ConfigTree::from_yaml("endpoint: 0.0.0.0:4317")?;
//! let parser = registry.parser_for("otlp/2", &config)?;
//! let ports = parser.ports();
//! assert_eq!(ports[0].port, 4317);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::{DefaultPortNamer, EndpointPortParser};
    pub use crate::domain::{
        ComponentType, ConfigTree, DynamicRolePolicy, ParserError, Result, ServicePortDescriptor,
    };
    pub use crate::ports::{
        AuthzBuilder, AuthzParser, ComponentPortParser, PortBuilder, PortNamer,
    };
    pub use crate::service::{
        port_from_endpoint, single_port_from_endpoint, AuthzRegistry, PortRegistry,
    };
}
