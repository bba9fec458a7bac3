// SPDX-License-Identifier: Apache-2.0

//! Service port descriptor produced by port parsers.

use crate::domain::errors::{ParserError, Result};
use serde::{Deserialize, Serialize};

/// A single network port implied by an exporter's configuration.
///
/// The descriptor feeds downstream Kubernetes Service generation: `name` is a
/// canonical, DNS-label-safe identifier derived from the exporter name and
/// port by the naming collaborator, and `port` is the parsed port number.
///
/// Construction is unchecked because the extractor reports exactly what it
/// parsed; callers that emit manifests should call [`validate`] first.
///
/// [`validate`]: ServicePortDescriptor::validate
///
/// # Examples
///
/// ```
/// use expcfg::domain::ServicePortDescriptor;
///
/// let port = ServicePortDescriptor::new("otlp-4317", 4317);
/// assert!(port.validate().is_ok());
///
/// let bad = ServicePortDescriptor::new("otlp-0", 0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePortDescriptor {
    /// Canonical port name, safe for use as a Kubernetes port name.
    pub name: String,
    /// The port number.
    pub port: i32,
}

impl ServicePortDescriptor {
    /// Creates a new descriptor from a name and port.
    pub fn new(name: impl Into<String>, port: i32) -> Self {
        ServicePortDescriptor {
            name: name.into(),
            port,
        }
    }

    /// Checks that the port lies in the valid service port range [1, 65535].
    pub fn validate(&self) -> Result<()> {
        if (1..=65535).contains(&self.port) {
            Ok(())
        } else {
            Err(ParserError::PortOutOfRange { port: self.port })
        }
    }
}
