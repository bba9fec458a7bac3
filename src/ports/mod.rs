// SPDX-License-Identifier: Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports, in the hexagonal
//! sense) that exporter-specific modules and collaborators implement: the
//! parser capabilities, their builder signatures, and the port naming
//! contract. Note that "ports" here refers to the architecture layer; the
//! network ports this crate extracts live in the domain layer as
//! [`ServicePortDescriptor`](crate::domain::ServicePortDescriptor).

pub mod naming;
pub mod parser;

// Re-export commonly used types
pub use naming::PortNamer;
pub use parser::{AuthzBuilder, AuthzParser, ComponentPortParser, PortBuilder};
