// SPDX-License-Identifier: Apache-2.0

//! Parser trait definitions and builder signatures.
//!
//! These are the interfaces exporter-specific modules implement to plug into
//! the registries. A component type may provide a port parser, an
//! authorization parser, both, or neither; the two capabilities are
//! registered and resolved independently.

use crate::domain::{ConfigTree, DynamicRolePolicy, ServicePortDescriptor};
use std::sync::Arc;

/// A parser reporting the service ports implied by one exporter's
/// configuration block.
///
/// Instances are created per parse request by a [`PortBuilder`] and bound to
/// a single configuration block; they hold no state beyond that call.
///
/// # Examples
///
/// ```
/// use expcfg::domain::{ConfigTree, ServicePortDescriptor};
/// use expcfg::ports::ComponentPortParser;
///
/// struct FixedPortParser;
///
/// impl ComponentPortParser for FixedPortParser {
///     fn parser_name(&self) -> &str {
///         "fixed"
///     }
///
///     fn ports(&self) -> Vec<ServicePortDescriptor> {
///         vec![ServicePortDescriptor::new("fixed-9090", 9090)]
///     }
/// }
/// ```
pub trait ComponentPortParser {
    /// Returns the logical name of this parser, for diagnostics.
    fn parser_name(&self) -> &str;

    /// Returns the service ports implied by the bound configuration.
    ///
    /// Malformed configuration degrades to an empty (or shorter) result with
    /// an error-level log entry; it never fails the call.
    fn ports(&self) -> Vec<ServicePortDescriptor>;
}

/// A parser reporting the RBAC rules implied by one exporter's configuration
/// block.
///
/// The rules themselves are opaque to this crate; see
/// [`DynamicRolePolicy`](crate::domain::DynamicRolePolicy).
pub trait AuthzParser {
    /// Returns the logical name of this parser, for diagnostics.
    fn parser_name(&self) -> &str;

    /// Returns the RBAC rules implied by the bound configuration.
    fn rbac_rules(&self) -> Vec<DynamicRolePolicy>;
}

impl std::fmt::Debug for dyn ComponentPortParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentPortParser")
            .field("parser_name", &self.parser_name())
            .finish()
    }
}

/// Builder producing a [`ComponentPortParser`] bound to a component name and
/// its configuration block.
///
/// Builders are pure construction and never fail; registry resolution is the
/// only fallible step. They must be `Send + Sync` so a sealed registry can be
/// shared across threads.
pub type PortBuilder =
    Arc<dyn Fn(&str, &ConfigTree) -> Box<dyn ComponentPortParser> + Send + Sync>;

/// Builder producing an [`AuthzParser`] bound to a component name and its
/// configuration block.
pub type AuthzBuilder = Arc<dyn Fn(&str, &ConfigTree) -> Box<dyn AuthzParser> + Send + Sync>;
