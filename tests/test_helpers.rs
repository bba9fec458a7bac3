// SPDX-License-Identifier: Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides a level-recording tracing layer, used to assert on
//! the diagnostic/error logging contract, plus small mock parsers shared
//! across test files.

#![allow(dead_code)]

use expcfg::domain::{ConfigTree, DynamicRolePolicy, ServicePortDescriptor};
use expcfg::ports::{AuthzParser, ComponentPortParser};
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A tracing layer that records the level of every emitted event.
#[derive(Clone, Default)]
pub struct LevelRecorder {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl LevelRecorder {
    /// Creates a new recorder with no recorded events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events recorded at the given level.
    pub fn count_at(&self, level: Level) -> usize {
        self.levels
            .lock()
            .unwrap()
            .iter()
            .filter(|l| **l == level)
            .count()
    }

    /// Number of error-level events recorded.
    pub fn error_count(&self) -> usize {
        self.count_at(Level::ERROR)
    }

    /// Number of debug-level events recorded.
    pub fn debug_count(&self) -> usize {
        self.count_at(Level::DEBUG)
    }
}

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.levels.lock().unwrap().push(*event.metadata().level());
    }
}

/// Runs `f` with a recording subscriber installed and returns the result
/// together with the recorder.
pub fn with_recorded_levels<T>(f: impl FnOnce() -> T) -> (T, LevelRecorder) {
    let recorder = LevelRecorder::new();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, recorder)
}

/// A port parser that always reports one fixed port.
pub struct FixedPortParser {
    pub name: String,
    pub descriptor: ServicePortDescriptor,
}

impl ComponentPortParser for FixedPortParser {
    fn parser_name(&self) -> &str {
        &self.name
    }

    fn ports(&self) -> Vec<ServicePortDescriptor> {
        vec![self.descriptor.clone()]
    }
}

/// An authz parser that forwards a fixed set of rules.
pub struct FixedAuthzParser {
    pub name: String,
    pub rules: Vec<DynamicRolePolicy>,
}

impl AuthzParser for FixedAuthzParser {
    fn parser_name(&self) -> &str {
        &self.name
    }

    fn rbac_rules(&self) -> Vec<DynamicRolePolicy> {
        self.rules.clone()
    }
}

/// Builds a one-key exporter config block: `endpoint: <value>`.
pub fn endpoint_config(endpoint: &str) -> ConfigTree {
    ConfigTree::from_yaml(&format!("endpoint: {}", endpoint)).unwrap()
}
