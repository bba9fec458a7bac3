// SPDX-License-Identifier: Apache-2.0

//! Adapters layer containing concrete implementations.
//!
//! This module contains the stock implementations of the crate's ports: the
//! default DNS-safe port namer and the generic endpoint-driven port parser.
//! Exporter modules with specialized needs implement the port traits
//! themselves and register their own builders.

pub mod endpoint;
pub mod naming;

// Re-export commonly used types
pub use endpoint::EndpointPortParser;
pub use naming::DefaultPortNamer;
