// SPDX-License-Identifier: Apache-2.0

//! Generic endpoint-driven port parser.

use crate::domain::{ConfigTree, ServicePortDescriptor};
use crate::ports::{ComponentPortParser, PortBuilder, PortNamer};
use crate::service::single_port_from_endpoint;
use std::sync::Arc;

use super::DefaultPortNamer;

/// The stock [`ComponentPortParser`] for exporters whose only port signal is
/// the `"endpoint"` key in their configuration.
///
/// Most exporters follow the `endpoint: host:port` convention, so their
/// modules can register this parser instead of writing their own. Exporters
/// with richer port semantics (multiple protocols, fixed well-known ports)
/// implement [`ComponentPortParser`] directly.
///
/// # Examples
///
/// ```
/// use expcfg::adapters::EndpointPortParser;
/// use expcfg::domain::ConfigTree;
/// use expcfg::service::PortRegistry;
///
/// let mut registry = PortRegistry::new();
/// registry.register("otlp", EndpointPortParser::builder());
/// registry.register("zipkin", EndpointPortParser::builder());
/// ```
pub struct EndpointPortParser {
    name: String,
    config: ConfigTree,
    namer: Arc<dyn PortNamer>,
}

impl EndpointPortParser {
    /// Creates a parser bound to an exporter name and its configuration
    /// block, naming ports with [`DefaultPortNamer`].
    pub fn new(name: impl Into<String>, config: ConfigTree) -> Self {
        Self::with_namer(name, config, Arc::new(DefaultPortNamer))
    }

    /// Creates a parser with a custom [`PortNamer`].
    pub fn with_namer(
        name: impl Into<String>,
        config: ConfigTree,
        namer: Arc<dyn PortNamer>,
    ) -> Self {
        EndpointPortParser {
            name: name.into(),
            config,
            namer,
        }
    }

    /// Returns a [`PortBuilder`] constructing this parser, for registry
    /// registration.
    pub fn builder() -> PortBuilder {
        Arc::new(|name, config| -> Box<dyn ComponentPortParser> {
            Box::new(EndpointPortParser::new(name, config.clone()))
        })
    }
}

impl ComponentPortParser for EndpointPortParser {
    fn parser_name(&self) -> &str {
        &self.name
    }

    fn ports(&self) -> Vec<ServicePortDescriptor> {
        single_port_from_endpoint(&self.name, &self.config, self.namer.as_ref())
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_single_port() {
        let config = ConfigTree::from_yaml("endpoint: 0.0.0.0:4317").unwrap();
        let parser = EndpointPortParser::new("otlp", config);
        assert_eq!(parser.parser_name(), "otlp");
        assert_eq!(
            parser.ports(),
            vec![ServicePortDescriptor::new("otlp", 4317)]
        );
    }

    #[test]
    fn test_reports_no_ports_without_endpoint() {
        let config = ConfigTree::from_yaml("compression: gzip").unwrap();
        let parser = EndpointPortParser::new("otlp", config);
        assert!(parser.ports().is_empty());
    }

    #[test]
    fn test_reports_no_ports_on_malformed_endpoint() {
        let config = ConfigTree::from_yaml("endpoint: localhost").unwrap();
        let parser = EndpointPortParser::new("otlp", config);
        assert!(parser.ports().is_empty());
    }

    #[test]
    fn test_custom_namer() {
        struct SuffixNamer;
        impl PortNamer for SuffixNamer {
            fn port_name(&self, exporter: &str, port: i32) -> String {
                format!("{}-{}", exporter, port)
            }
        }

        let config = ConfigTree::from_yaml("endpoint: localhost:9411").unwrap();
        let parser = EndpointPortParser::with_namer("zipkin", config, Arc::new(SuffixNamer));
        assert_eq!(parser.ports()[0].name, "zipkin-9411");
    }

    #[test]
    fn test_builder_binds_name_and_config() {
        let builder = EndpointPortParser::builder();
        let config = ConfigTree::from_yaml("endpoint: collector:14250").unwrap();
        let parser = builder("jaeger", &config);
        assert_eq!(parser.parser_name(), "jaeger");
        assert_eq!(parser.ports()[0].port, 14250);
    }
}
