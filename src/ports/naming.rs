// SPDX-License-Identifier: Apache-2.0

//! Port naming collaborator contract.

/// Produces canonical, Kubernetes-safe names for service ports.
///
/// The algorithm is owned by the collaborator; this crate only requires that
/// the result is deterministic for the same `(exporter, port)` input, so the
/// namer can be replaced in tests. Implementations must be `Send + Sync`
/// because parsers holding a namer may be built behind shared builders.
///
/// # Examples
///
/// ```
/// use expcfg::ports::PortNamer;
///
/// struct PlainNamer;
///
/// impl PortNamer for PlainNamer {
///     fn port_name(&self, exporter: &str, port: i32) -> String {
///         format!("{}-{}", exporter, port)
///     }
/// }
///
/// assert_eq!(PlainNamer.port_name("otlp", 4317), "otlp-4317");
/// ```
pub trait PortNamer: Send + Sync {
    /// Returns the canonical port name for the given exporter name and port.
    fn port_name(&self, exporter: &str, port: i32) -> String;
}
