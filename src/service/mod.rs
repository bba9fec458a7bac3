// SPDX-License-Identifier: Apache-2.0

//! Service layer orchestrating parser resolution.
//!
//! This module contains the two builder registries and the endpoint/port
//! extraction functions that generic parsers are built on.

pub mod endpoint;
pub mod registry;

// Re-export commonly used types
pub use endpoint::{
    endpoint_from_config, port_from_endpoint, single_port_from_endpoint, ENDPOINT_KEY,
};
pub use registry::{AuthzRegistry, BuilderRegistry, PortRegistry};
