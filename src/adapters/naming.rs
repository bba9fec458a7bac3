// SPDX-License-Identifier: Apache-2.0

//! Default port naming adapter.

use crate::ports::PortNamer;

/// Kubernetes port names are IANA service names, capped at 15 characters.
const MAX_PORT_NAME_LEN: usize = 15;

/// Default [`PortNamer`] producing DNS-label-safe port names.
///
/// The exporter name is lowercased, runs of characters outside `[a-z0-9]`
/// are collapsed to a single `-`, and leading/trailing dashes are trimmed.
/// When the sanitized name is empty or exceeds the 15-character Kubernetes
/// port name limit, the namer falls back to `port-<port>`, which keeps the
/// result valid for any input.
///
/// # Examples
///
/// ```
/// use expcfg::adapters::DefaultPortNamer;
/// use expcfg::ports::PortNamer;
///
/// let namer = DefaultPortNamer;
/// assert_eq!(namer.port_name("otlp", 4317), "otlp");
/// assert_eq!(namer.port_name("OTLP/HTTP", 4318), "otlp-http");
/// assert_eq!(namer.port_name("a-very-long-exporter-name", 4317), "port-4317");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPortNamer;

impl DefaultPortNamer {
    fn sanitize(exporter: &str) -> String {
        let mut result = String::with_capacity(exporter.len());
        for c in exporter.chars() {
            if c.is_ascii_alphanumeric() {
                result.extend(c.to_lowercase());
            } else if !result.ends_with('-') && !result.is_empty() {
                result.push('-');
            }
        }
        result.trim_end_matches('-').to_string()
    }
}

impl PortNamer for DefaultPortNamer {
    fn port_name(&self, exporter: &str, port: i32) -> String {
        let name = Self::sanitize(exporter);
        if name.is_empty() || name.len() > MAX_PORT_NAME_LEN {
            format!("port-{}", port)
        } else {
            name
        }
    }
}
