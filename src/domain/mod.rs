// SPDX-License-Identifier: Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the fundamental types used throughout the crate:
//! component type keys, the loosely-typed configuration tree, the outputs of
//! port and authorization parsing, and the error type.

pub mod component_type;
pub mod config_tree;
pub mod errors;
pub mod policy;
pub mod service_port;

// Re-export commonly used types
pub use component_type::ComponentType;
pub use config_tree::ConfigTree;
pub use errors::{ParserError, Result};
pub use policy::DynamicRolePolicy;
pub use service_port::ServicePortDescriptor;
