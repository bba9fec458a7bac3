// SPDX-License-Identifier: Apache-2.0

//! Error types for the parser registry.
//!
//! This module defines the errors that can occur when resolving parser
//! builders or extracting ports from endpoint values. All errors use
//! `thiserror` for proper error handling and conversion.
//!
//! Only [`ParserError::NoBuilderRegistered`] is meant to surface to the
//! configuration-processing caller; the endpoint/port malformation variants
//! are absorbed and logged by the extraction layer so that one broken
//! exporter block never aborts processing of the rest of the configuration.

use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for parser registry operations.
///
/// Marked `#[non_exhaustive]` to allow future additions without breaking
/// backwards compatibility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParserError {
    /// No parser builder is registered for the given component type.
    #[error("no builder registered for component type '{component}'")]
    NoBuilderRegistered {
        /// The normalized component type that missed the registry.
        component: String,
    },

    /// The endpoint carried no usable port: either no `:digits` run was
    /// found, or the digits evaluated to zero.
    #[error("port should not be empty")]
    EmptyPort,

    /// The digit run following the colon did not fit a signed 32-bit port.
    #[error("failed to parse port from endpoint: {0}")]
    PortParse(#[from] ParseIntError),

    /// A port value fell outside the valid service port range.
    #[error("port {port} is outside the valid range [1, 65535]")]
    PortOutOfRange {
        /// The offending port value.
        port: i32,
    },

    /// Failed to decode a YAML configuration document.
    #[error("failed to parse configuration document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ParserError {
    /// Creates a `NoBuilderRegistered` error for the given component type.
    pub fn no_builder(component: impl Into<String>) -> Self {
        ParserError::NoBuilderRegistered {
            component: component.into(),
        }
    }
}

/// A specialized Result type for parser registry operations.
pub type Result<T> = std::result::Result<T, ParserError>;
