// SPDX-License-Identifier: Apache-2.0

//! Endpoint lookup and port extraction.
//!
//! These functions pull an `"endpoint"` value out of an exporter's
//! configuration block and derive a validated port number from it. The
//! overriding policy is graceful degradation: a missing endpoint is benign
//! (logged at debug level), and a malformed one is logged at error level and
//! reported as "no port" so that a single broken exporter never aborts
//! processing of the rest of the configuration.

use crate::domain::{ConfigTree, ParserError, Result, ServicePortDescriptor};
use crate::ports::PortNamer;

/// The configuration key holding an exporter's endpoint value.
pub const ENDPOINT_KEY: &str = "endpoint";

/// Looks up `key` in an exporter's configuration block.
///
/// Absence is expected and benign: it is logged at debug level and reported
/// as `None`, never as an error.
pub fn endpoint_from_config<'a>(
    exporter: &str,
    key: &str,
    config: &'a ConfigTree,
) -> Option<&'a ConfigTree> {
    match config.get(key) {
        Some(value) => Some(value),
        None => {
            tracing::debug!(exporter, key, "exporter config has no such entry");
            None
        }
    }
}

/// Derives at most one service port from an exporter's `"endpoint"` value.
///
/// Returns `None` when the endpoint is absent, is not a string, or carries no
/// parseable port; the latter two cases emit an error-level log entry citing
/// the offending value. On success the descriptor's name comes from the
/// injected [`PortNamer`].
///
/// # Examples
///
/// ```
/// use expcfg::adapters::DefaultPortNamer;
/// use expcfg::domain::ConfigTree;
/// use expcfg::service::single_port_from_endpoint;
///
/// let config = ConfigTree::from_yaml("endpoint: 0.0.0.0:4317").unwrap();
/// let port = single_port_from_endpoint("otlp", &config, &DefaultPortNamer).unwrap();
/// assert_eq!(port.port, 4317);
/// assert_eq!(port.name, "otlp");
/// ```
pub fn single_port_from_endpoint(
    exporter: &str,
    config: &ConfigTree,
    namer: &dyn PortNamer,
) -> Option<ServicePortDescriptor> {
    let endpoint = endpoint_from_config(exporter, ENDPOINT_KEY, config)?;

    match endpoint {
        ConfigTree::String(e) => match port_from_endpoint(e) {
            Ok(port) => Some(ServicePortDescriptor::new(namer.port_name(exporter, port), port)),
            Err(err) => {
                tracing::error!(
                    exporter,
                    endpoint = %e,
                    error = %err,
                    "couldn't parse the endpoint's port"
                );
                None
            }
        },
        other => {
            tracing::error!(
                exporter,
                endpoint = ?other,
                kind = other.kind(),
                "exporter endpoint is not a string"
            );
            None
        }
    }
}

/// Parses a port number out of a `host:port`-shaped endpoint string.
///
/// The scan looks for a colon followed by one or more decimal digits and
/// takes the first such run, left to right. Endpoint strings can contain
/// several colons (IPv6 literals, scheme prefixes); the first-match tie-break
/// is deliberate and matches long-standing behavior, so ambiguous inputs keep
/// resolving the way they always have.
///
/// A missing run and a run that evaluates to zero are both reported as
/// [`ParserError::EmptyPort`]; digits that overflow an `i32` propagate as
/// [`ParserError::PortParse`].
///
/// # Examples
///
/// ```
/// use expcfg::service::port_from_endpoint;
///
/// assert_eq!(port_from_endpoint("localhost:4317").unwrap(), 4317);
/// assert!(port_from_endpoint("localhost").is_err());
/// assert!(port_from_endpoint("localhost:0").is_err());
/// ```
pub fn port_from_endpoint(endpoint: &str) -> Result<i32> {
    let mut port = 0i32;

    let bytes = endpoint.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b':' {
            let digits = bytes[i + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if digits > 0 {
                port = endpoint[i + 1..i + 1 + digits].parse::<i32>()?;
                break;
            }
        }
    }

    if port == 0 {
        return Err(ParserError::EmptyPort);
    }

    Ok(port)
}
